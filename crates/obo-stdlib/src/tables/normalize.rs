use obo_graph::AttributeValue;

/// Separator placed between list elements when a list cell is flattened
pub const LIST_SEPARATOR: &str = "; ";

/// Flatten one cell to a printable string
///
/// A list becomes its elements joined with [`LIST_SEPARATOR`]; an empty list
/// or a missing value becomes `""`.
pub fn flatten_cell(cell: AttributeValue) -> String {
    match cell {
        AttributeValue::List(values) => values.join(LIST_SEPARATOR),
        AttributeValue::Scalar(value) => value,
        AttributeValue::Missing => String::new(),
    }
}

/// Turn one column of typed cells into output cells.
///
/// Only list-typed columns (at least one list cell) are flattened; in those,
/// every cell becomes a string. Scalar-only columns pass through unchanged and
/// missing cells stay `None`.
pub fn normalize_column(cells: Vec<AttributeValue>) -> Vec<Option<String>> {
    let list_typed = cells.iter().any(AttributeValue::is_list);

    cells
        .into_iter()
        .map(|cell| {
            if list_typed {
                return Some(flatten_cell(cell));
            }
            match cell {
                AttributeValue::Scalar(value) => Some(value),
                AttributeValue::List(_) | AttributeValue::Missing => None,
            }
        })
        .collect()
}
