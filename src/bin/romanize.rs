use weatherscraper::translit;

fn main() {
    let names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        eprintln!("usage: romanize <place name>...");
        std::process::exit(1);
    }
    for name in names {
        println!("{}", translit::place_to_pinyin(&name));
    }
}
