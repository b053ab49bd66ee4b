// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};
use iced_lightbox::{logging, paths, source};

const HELP: &str = "\
iced_lightbox - image gallery with zoom and pan

USAGE:
  iced_lightbox [OPTIONS] [IMAGE|URL|DIRECTORY]...

OPTIONS:
  --lang <id>         Interface language (e.g. en-US, fr)
  --config-dir <dir>  Directory holding settings.toml
  --title <text>      Title of the detail page
  --backend <url>     Content backend base URL
  --content <id>      Load the images of this content from the backend
  --token <token>     Bearer token for the backend
  -h, --help          Print this help
";

fn main() -> iced::Result {
    logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = optional_value(&mut args, "--lang");
    let config_dir = optional_value(&mut args, "--config-dir");
    let title = optional_value(&mut args, "--title");
    let backend_url = optional_value(&mut args, "--backend");
    let content_id = optional_value(&mut args, "--content");
    let access_token = optional_value(&mut args, "--token");

    paths::init_cli_overrides(config_dir);

    let positional: Vec<String> = args
        .finish()
        .into_iter()
        .filter_map(|arg| match arg.into_string() {
            Ok(arg) => Some(arg),
            Err(arg) => {
                tracing::warn!(?arg, "ignoring non UTF-8 argument");
                None
            }
        })
        .collect();

    let locations = match source::locations_from_args(&positional) {
        Ok(locations) => locations,
        Err(error) => {
            tracing::warn!(%error, "could not expand image arguments");
            Vec::new()
        }
    };

    app::run(Flags {
        lang,
        backend_url,
        content_id,
        access_token,
        locations,
        title,
    })
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "invalid command-line value");
            None
        }
    }
}
