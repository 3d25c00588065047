use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object, ObjectId};

fn page_id(doc: &LopdfDocument, page_number: u32) -> ObjectId {
    *doc.get_pages()
        .get(&page_number)
        .unwrap_or_else(|| panic!("page {page_number} missing"))
}

fn page_content(doc: &LopdfDocument, page_number: u32) -> Content {
    doc.get_and_decode_page_content(page_id(doc, page_number))
        .expect("page content decodes")
}

/// Every string shown with `Tj` on a page, in paint order.
pub fn page_strings(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    page_content(doc, page_number)
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        })
        .collect()
}

pub fn page_has_text(doc: &LopdfDocument, page_number: u32, needle: &str) -> bool {
    page_strings(doc, page_number).iter().any(|s| s.contains(needle))
}

/// Number of XObjects painted with `Do` on a page.
pub fn image_draws(doc: &LopdfDocument, page_number: u32) -> usize {
    page_content(doc, page_number)
        .operations
        .iter()
        .filter(|op| op.operator == "Do")
        .count()
}

/// MediaBox of a page as `(width, height)`.
pub fn page_size(doc: &LopdfDocument, page_number: u32) -> (f32, f32) {
    let page = doc
        .get_dictionary(page_id(doc, page_number))
        .expect("page dictionary");
    let media_box = page
        .get(b"MediaBox")
        .and_then(Object::as_array)
        .expect("page has a MediaBox");
    let number = |o: &Object| o.as_float().expect("numeric MediaBox entry");
    (number(&media_box[2]), number(&media_box[3]))
}

/// BaseFont names of every font object in the document.
pub fn font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut names: Vec<String> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter(|dict| matches!(dict.get(b"Type"), Ok(Object::Name(n)) if n == b"Font"))
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();
    names.sort();
    names
}

/// Whether any image XObject in the document carries a soft mask.
pub fn has_masked_image(doc: &LopdfDocument) -> bool {
    doc.objects.values().any(|object| match object {
        Object::Stream(stream) => stream.dict.get(b"SMask").is_ok(),
        _ => false,
    })
}

pub fn has_image(doc: &LopdfDocument) -> bool {
    doc.objects.values().any(|object| match object {
        Object::Stream(stream) => {
            matches!(stream.dict.get(b"Subtype"), Ok(Object::Name(n)) if n == b"Image")
        }
        _ => false,
    })
}
