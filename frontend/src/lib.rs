//! Browser side of the PayMyBuddy client.
//!
//! `start` reads the page configuration, installs the console logger and
//! attaches every feature the page renders. The behaviour itself lives in
//! the `common` crate; this crate supplies the DOM, `fetch` and Yew pieces.

pub mod components;
pub mod dom;
pub mod http;
pub mod logger;
pub mod page;

pub fn start() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            gloo_console::error!(err.to_string());
            return;
        }
    };

    let (config, warnings) = page::read_config(&document);
    logger::init(config.log_level);
    for warning in warnings {
        log::warn!("page configuration: {}", warning);
    }
    log::debug!("{:?}", config);

    page::mount(&document, &config);
}
