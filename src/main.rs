#[cfg(feature = "ssr")]
#[tokio::main]
pub async fn main() -> checkout_confirm::backend::utils::error::BackendResult<()> {
    use checkout_confirm::backend::ConfirmConfig;
    use log::LevelFilter;

    if std::env::args().collect::<Vec<_>>().get(1) == Some(&"--print-config".to_string()) {
        println!("{}", doku::to_toml::<ConfirmConfig>());
        std::process::exit(0);
    }

    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .filter_module("checkout_confirm", LevelFilter::Info)
        .init();

    let config = ConfirmConfig::read()?;
    checkout_confirm::backend::start(config, None, None).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // the client side entrypoint is `hydrate()` in lib.rs
}
