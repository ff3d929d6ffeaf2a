use crate::error::{ProcessingError, Result};
use crate::utils::constants::DOWNLOADABLE_EXTENSIONS;
use percent_encoding::percent_decode_str;
use scraper::{Html, Selector};
use url::Url;

/// Collect the spreadsheet links (`.xls`, `.xlsx`, `.csv`) of a listing page,
/// in document order, resolved against `base`.
pub fn extract_links(html: &str, base: &Url) -> Result<Vec<Url>> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]")
        .map_err(|e| ProcessingError::InvalidFormat(format!("Invalid selector: {}", e)))?;

    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        if is_downloadable(href) {
            links.push(base.join(href)?);
        }
    }

    Ok(links)
}

pub fn is_downloadable(href: &str) -> bool {
    DOWNLOADABLE_EXTENSIONS.iter().any(|ext| href.ends_with(ext))
}

/// Local file name for a download: the last path segment of the URL,
/// percent-decoded (`emisi%C3%B3n.csv` is saved as `emisión.csv`)
pub fn file_name_for(url: &Url) -> Result<String> {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ProcessingError::InvalidFormat(format!("No file name in URL {}", url)))?;

    let name = percent_decode_str(segment).decode_utf8().map_err(|_| {
        ProcessingError::InvalidFormat(format!("File name in URL {} is not valid UTF-8", url))
    })?;

    if name.contains(['/', '\\']) || name == ".." || name == "." {
        return Err(ProcessingError::InvalidFormat(format!(
            "Unusable file name '{}' in URL {}",
            name, url
        )));
    }

    Ok(name.into_owned())
}
