use mojodoc_core::{ClassDoc, ExtractionWarning};

/// One-line summary of a class documentation record
pub fn format_class_doc(doc: &ClassDoc) -> String {
    let super_class = doc
        .super_class_doc()
        .map(|super_doc| super_doc.fully_qualified_name.as_str())
        .unwrap_or("-");
    let properties = doc.properties.len();

    format!(
        "{}  extends {}  ({} {})",
        doc.fully_qualified_name,
        super_class,
        properties,
        if properties == 1 { "property" } else { "properties" }
    )
}

/// Print extraction warnings to stderr
pub fn print_warnings(warnings: &[ExtractionWarning]) {
    for warning in warnings {
        eprintln!("⚠️  {warning}");
    }
}
