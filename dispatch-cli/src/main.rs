//! Binary entrypoint for dispatch-cli (made by FontLab https://www.fontlab.com/)

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = dispatch_cli::run() {
        if !dispatch_cli::already_reported(&err) {
            eprintln!("error: {err}");
        }
        std::process::exit(dispatch_cli::exit_code(&err));
    }
}
