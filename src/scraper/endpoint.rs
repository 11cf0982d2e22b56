use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::dom::DocumentIndex;
use crate::models::{ApiDocEntry, RequestParameter, ResponseParameter};

static CANDIDATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("h2, h3, p, table").expect("Failed to parse candidate selector - this is a bug")
});
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("Failed to parse row selector - this is a bug"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("Failed to parse cell selector - this is a bug"));

const ENDPOINT_HEADING: &str = "h2";

/// Split a parameter table's rows by cell count: four `td` cells make a
/// request parameter, three make a response parameter, anything else
/// (header rows of `th`, separators) is dropped.
pub fn classify_rows(table: ElementRef<'_>) -> (Vec<RequestParameter>, Vec<ResponseParameter>) {
    let mut request = Vec::new();
    let mut response = Vec::new();

    for row in table.select(&ROW_SELECTOR) {
        let cells: Vec<String> = row
            .select(&CELL_SELECTOR)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        match cells.as_slice() {
            [name, param_type, required, description] => request.push(RequestParameter {
                name: name.clone(),
                param_type: param_type.clone(),
                required: required.clone(),
                description: description.clone(),
            }),
            [name, param_type, description] => response.push(ResponseParameter {
                name: name.clone(),
                param_type: param_type.clone(),
                description: description.clone(),
            }),
            _ => {}
        }
    }

    (request, response)
}

/// Extract every endpoint documented on one category page.
///
/// Each scanned `h2`/`h3`/`p`/`table` element is attributed to the nearest
/// `h2` before it; every such heading opens a section that runs to the next
/// `h2`. Sections missing their description, method or URL paragraph are
/// skipped.
pub fn extract_entries(category: &str, html: &str) -> Vec<ApiDocEntry> {
    let document = Html::parse_document(html);
    let index = DocumentIndex::new(&document);

    let mut headings: Vec<usize> = Vec::new();
    for candidate in document.select(&CANDIDATE_SELECTOR) {
        let Some(position) = index.position(candidate) else {
            continue;
        };
        if let Some(heading) = index.find_previous(position, ENDPOINT_HEADING)
            && headings.last() != Some(&heading)
        {
            headings.push(heading);
        }
    }

    headings
        .into_iter()
        .filter_map(|heading| {
            let end = index.find_next(heading, index.len(), ENDPOINT_HEADING).unwrap_or(index.len());
            let entry = extract_section(&index, category, heading, end);
            if entry.is_none() {
                debug!(heading = %index.text(heading), "Skipping incomplete endpoint section");
            }
            entry
        })
        .collect()
}

fn extract_section(index: &DocumentIndex<'_>, category: &str, heading: usize, end: usize) -> Option<ApiDocEntry> {
    let description = index.find_next(heading, end, "p")?;
    let method = index.find_next(description, end, "p")?;
    let url = index.find_next(method, end, "p")?;

    let (request_parameters, response_parameters) = section_parameters(index, heading, end);

    let success = index.find_next(heading, end, "pre");
    let error = success.and_then(|block| index.find_next(block, end, "pre"));

    let entry = ApiDocEntry {
        category: category.to_string(),
        name: index.text(heading),
        description: index.text(description),
        request_method: index.text(method),
        request_url: index.text(url),
        request_parameters,
        response_parameters,
        success_response: success.map(|block| index.text(block)).unwrap_or_default(),
        error_response: error.map(|block| index.text(block)).unwrap_or_default(),
    };

    debug!(
        name = %entry.name,
        request = entry.request_parameters.len(),
        response = entry.response_parameters.len(),
        "Extracted endpoint"
    );
    Some(entry)
}

/// Classify the rows of every table in the section, in document order.
/// Tables nested in another table are covered by the outer table's rows.
fn section_parameters(
    index: &DocumentIndex<'_>,
    heading: usize,
    end: usize,
) -> (Vec<RequestParameter>, Vec<ResponseParameter>) {
    let mut request = Vec::new();
    let mut response = Vec::new();

    let mut cursor = heading;
    while let Some(table) = index.find_next(cursor, end, "table") {
        cursor = table;
        let element = index.element(table);
        if element.ancestors().filter_map(ElementRef::wrap).any(|a| a.value().name() == "table") {
            continue;
        }
        let (table_request, table_response) = classify_rows(element);
        request.extend(table_request);
        response.extend(table_response);
    }

    (request, response)
}
