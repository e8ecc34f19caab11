use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Stylesheets and icons compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct ConsoleAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON: OnceLock<String> = OnceLock::new();
static LOGO: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| text_asset("main.css")).as_str()
}

/// Utility classes generated from `tailwind.css` at the repository root.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS
        .get_or_init(|| text_asset("tailwind.css"))
        .as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON.get_or_init(|| data_uri("favicon.svg")).as_str()
}

pub fn logo_data_uri() -> &'static str {
    LOGO.get_or_init(|| data_uri("logo.svg")).as_str()
}

fn text_asset(name: &str) -> String {
    String::from_utf8(raw_asset(name).into_owned())
        .unwrap_or_else(|_| panic!("embedded asset {name} is not valid UTF-8"))
}

fn data_uri(name: &str) -> String {
    let bytes = raw_asset(name);
    format!("data:{};base64,{}", mime_for(name), encode_base64(bytes.as_ref()))
}

fn raw_asset(name: &str) -> Cow<'static, [u8]> {
    ConsoleAssets::get(name.trim_start_matches('/'))
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("embedded asset {name} is missing"))
}

fn mime_for(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

fn encode_base64(input: &[u8]) -> String {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut output = String::with_capacity(input.len().div_ceil(3) * 4);

    for chunk in input.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        let sextets = [
            b0 >> 2,
            ((b0 & 0b11) << 4) | (b1 >> 4),
            ((b1 & 0b1111) << 2) | (b2 >> 6),
            b2 & 0b0011_1111,
        ];

        for (index, sextet) in sextets.into_iter().enumerate() {
            if index <= chunk.len() {
                output.push(TABLE[sextet as usize] as char);
            } else {
                output.push('=');
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base64_pads_short_chunks() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(encode_base64(b"f"), "Zg==");
        assert_eq!(encode_base64(b"fo"), "Zm8=");
        assert_eq!(encode_base64(b"foo"), "Zm9v");
        assert_eq!(encode_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn bundled_assets_load() {
        assert!(main_css().contains(".quote-table"));
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert_eq!(mime_for("logo.svg"), "image/svg+xml");
        assert_eq!(mime_for("README"), "application/octet-stream");
    }
}
