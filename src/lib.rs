mod error;
pub use error::Error;

pub mod card;
pub mod font;
pub mod geometry;

mod render;
pub use render::*;

pub mod shape;

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// File written by [`create_calm_card`], relative to the working directory.
pub const OUTPUT_PATH: &str = "calm_down_card.pdf";

/// Renders the card and returns the finished PDF.
pub fn render_calm_card() -> Result<Vec<u8>, Error> {
    Renderer::new(card::DOCUMENT_TITLE, card::PAGE_SIZE).render(card::compose)
}

/// Renders the card into `path`. A failed write may leave a partial file.
pub fn write_calm_card(path: impl AsRef<std::path::Path>) -> Result<PathBuf, Error> {
    let path = path.as_ref();
    let pdf = render_calm_card()?;

    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&pdf)?;
    writer.flush()?;

    tracing::info!("Wrote {} bytes to {}", pdf.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn create_calm_card() -> Result<PathBuf, Error> {
    write_calm_card(OUTPUT_PATH)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use lopdf::{Document, Object, content::Content};

    use crate::card::content::{ENERGY_LEVELS, SENSES};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("calm_card_{}_{name}.pdf", std::process::id()))
    }

    fn number(object: &Object) -> f64 {
        match object {
            Object::Integer(value) => *value as f64,
            Object::Real(value) => *value as f64,
            other => panic!("not a number: {other:?}"),
        }
    }

    fn page_content(pdf: &[u8]) -> Vec<u8> {
        let document = Document::load_mem(pdf).unwrap();
        let page_id = *document.get_pages().values().next().unwrap();
        document.get_page_content(page_id).unwrap()
    }

    /// Operands of every `Tj` on the page, as encoded bytes.
    fn shown_strings(content: &[u8]) -> Vec<Vec<u8>> {
        Content::decode(content)
            .unwrap()
            .operations
            .into_iter()
            .filter(|operation| operation.operator == "Tj")
            .filter_map(|operation| match operation.operands.into_iter().next() {
                Some(Object::String(bytes, _)) => Some(bytes),
                _ => None,
            })
            .collect()
    }

    fn shows(strings: &[Vec<u8>], needle: &str) -> bool {
        let needle = needle.as_bytes();
        strings
            .iter()
            .any(|bytes| bytes.windows(needle.len()).any(|window| window == needle))
    }

    #[test]
    fn writes_single_letter_page() {
        let path = temp_path("single");
        let written = super::write_calm_card(&path).unwrap();
        assert_eq!(written, path);

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let document = Document::load_mem(&bytes).unwrap();
        let pages = document.get_pages();
        assert_eq!(pages.len(), 1);

        let page_id = *pages.values().next().unwrap();
        let page = document.get_object(page_id).unwrap().as_dict().unwrap();
        let media_box: Vec<f64> = page
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(number)
            .collect();
        assert!((media_box[2] - media_box[0] - 612.0).abs() < 0.5);
        assert!((media_box[3] - media_box[1] - 792.0).abs() < 0.5);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn written_page_shows_headings_and_labels() {
        const HEADINGS: [&str; 5] = [
            "CALM STATION",
            "CHECK YOUR ENERGY",
            "BREATHE",
            "GROUND YOURSELF",
            "CHECK AGAIN",
        ];

        let path = temp_path("strings");
        super::write_calm_card(&path).unwrap();
        let strings = shown_strings(&page_content(&fs::read(&path).unwrap()));
        fs::remove_file(&path).unwrap();

        let labels = ENERGY_LEVELS.iter().map(|level| level.label);
        let names = SENSES.iter().map(|sense| sense.name);
        for needle in HEADINGS.into_iter().chain(labels).chain(names) {
            assert!(shows(&strings, needle), "{needle}");
        }

        // WinAnsi em dash; printpdf encodes the bullet as 0x7f, which viewers draw as a bullet
        let subtitle = b"Your Regulation Tool  \x7f  Keep This Card Nearby".to_vec();
        assert!(strings.contains(&b"IN \x97 4 sec".to_vec()));
        assert!(strings.contains(&subtitle));
    }

    #[test]
    fn repeated_runs_draw_identical_pages() {
        let first = super::render_calm_card().unwrap();
        let second = super::render_calm_card().unwrap();

        for pdf in [&first, &second] {
            assert_eq!(Document::load_mem(pdf).unwrap().get_pages().len(), 1);
        }
        assert_eq!(page_content(&first), page_content(&second));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let path = temp_path("missing").join("nested").join("card.pdf");
        assert!(matches!(
            super::write_calm_card(&path),
            Err(crate::Error::Io(_))
        ));
    }
}
