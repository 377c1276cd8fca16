//! Default column naming for auto-mapped properties

/// Converts a property name to its default column name.
///
/// An underscore goes before every uppercase character except the first,
/// then the whole name is lowercased: `ParentId` → `parent_id`.
pub fn to_snake_column(property: &str) -> String {
    let mut column = String::with_capacity(property.len() + 4);

    for (i, c) in property.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            column.push('_');
        }
        column.extend(c.to_lowercase());
    }

    column
}
