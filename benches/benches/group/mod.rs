use unicode_ucd_properties::Sources;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// каталог с файлами UCD
pub const DATA_DIR: &str = "./../source/tests/data";

#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, $name: expr, $codes: expr) => {
        #[inline(never)]
        fn $test(ucd: &Ucd, codes: &[u32]) -> usize
        {
            codes.iter().filter_map(|code| ucd.analyze(*code).ok()).map(|set| set.len()).sum()
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);

            let files = group::read_dir(group::DATA_DIR);
            let ucd = Ucd::parse(&group::sources(&files), Config::default()).unwrap();
            let codes: Vec<u32> = $codes.collect();

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            group.bench_with_input(
                criterion::BenchmarkId::new($name, codes.len()),
                &(&ucd, codes.as_slice()),
                |b, data| b.iter(|| $test(data.0, criterion::black_box(data.1))),
            );

            group.finish();
        }
    };
}

/// прочитать папку с файлами UCD: (название без формата, содержимое)
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let dir = std::fs::read_dir(dir).unwrap();

    let mut data: Vec<(String, String)> = vec![];

    for entry in dir {
        let entry = entry.unwrap();

        let path = entry.path();
        let path = path.to_str().unwrap();

        data.push((get_name(path).to_owned(), read(path)));
    }

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// содержимое файлов, разложенное по источникам
pub fn sources(files: &[(String, String)]) -> Sources<'_>
{
    let find = |name: &str| {
        files
            .iter()
            .find(|(file, _)| file == name)
            .map(|(_, content)| content.as_str())
            .unwrap_or("")
    };

    Sources {
        unicode_data: find("UnicodeData"),
        name_aliases: find("NameAliases"),
        derived_core_properties: find("DerivedCoreProperties"),
        prop_list: find("PropList"),
        property_aliases: find("PropertyAliases"),
        property_value_aliases: find("PropertyValueAliases"),
    }
}

/// прочитать файл
fn read(source: &str) -> String
{
    let mut file = std::fs::File::open(source).unwrap();
    let mut buffer = String::new();

    std::io::Read::read_to_string(&mut file, &mut buffer).unwrap();

    buffer
}

/// вырезать из полного пути к файлу его название, без формата
fn get_name(filename: &str) -> &str
{
    let (_, name) = filename.trim_end_matches(".txt").rsplit_once('/').unwrap();

    name
}
