use sangria_core::Kind;
use sangria_desktop::runner;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = runner::env_args();
    let argv: Vec<&str> = args.iter().map(String::as_str).collect();
    runner::execute(Kind::Font, &argv, &mut std::io::stdout().lock());
}
