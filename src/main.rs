// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod api;
mod auth;
mod cli;
mod client;
mod config;
mod console_format;
mod error;
mod models;
mod pagination;
mod report;
mod runner;
mod signature;
mod ui;

#[cfg(test)]
mod test_support;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(runner::EXIT_FAILURE);
    }

    let options = config::build_run_options(&args, |key| std::env::var(key).ok());

    // Missing credentials are prompted for on stderr so stdout carries only the report
    let stdin = std::io::stdin();
    let credentials = match config::resolve_credentials(
        &args,
        |key| std::env::var(key).ok(),
        &mut stdin.lock(),
        &mut std::io::stderr(),
    ) {
        Ok(credentials) => credentials,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(runner::EXIT_FAILURE);
        }
    };

    let exit_code = runner::run(&credentials, &options);
    std::process::exit(exit_code);
}
