// SPDX-License-Identifier: MPL-2.0
use iced_nextup::app::{self, Flags};
use iced_nextup::paths;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    paths::init_cli_override(config_dir);

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        playlist_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
