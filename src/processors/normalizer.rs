use crate::models::Dataset;
use crate::utils::constants::EXPECTED_COLUMNS;

/// Trim column names and, when the whole canonical schema is present,
/// project the dataset onto it in canonical order.
pub fn normalize_columns(mut dataset: Dataset) -> Dataset {
    dataset.rename_columns(|name| name.trim().to_string());

    let canonical: Option<Vec<usize>> = EXPECTED_COLUMNS
        .iter()
        .map(|name| dataset.column_index(name))
        .collect();

    match canonical {
        Some(indices) => dataset.select_columns(&indices),
        None => dataset,
    }
}

/// Canonical columns first (those present), then every remaining column in
/// its current order
pub fn reorder_output_columns(dataset: &Dataset) -> Dataset {
    let mut indices: Vec<usize> = EXPECTED_COLUMNS
        .iter()
        .filter_map(|name| dataset.column_index(name))
        .collect();

    let extras: Vec<usize> = (0..dataset.columns().len())
        .filter(|i| !indices.contains(i))
        .collect();
    indices.extend(extras);

    dataset.select_columns(&indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, Record};
    use pretty_assertions::assert_eq;

    fn dataset_with(columns: &[&str]) -> Dataset {
        let cells = columns.iter().map(|c| Cell::Text(format!("v_{}", c.trim()))).collect();
        Dataset::new(
            columns.iter().map(|c| c.to_string()).collect(),
            vec![Record::new(cells)],
        )
    }

    #[test]
    fn test_permutation_is_reordered() {
        let mut shuffled: Vec<&str> = EXPECTED_COLUMNS.to_vec();
        shuffled.reverse();
        shuffled.swap(0, 7);

        let normalized = normalize_columns(dataset_with(&shuffled));

        assert_eq!(normalized.columns(), EXPECTED_COLUMNS.map(String::from).as_slice());
        assert_eq!(normalized.value(0, "region"), Some(&Cell::Text("v_region".into())));
        assert_eq!(normalized.value(0, "año"), Some(&Cell::Text("v_año".into())));
    }

    #[test]
    fn test_names_are_trimmed() {
        let padded: Vec<String> = EXPECTED_COLUMNS.iter().map(|c| format!(" {} ", c)).collect();
        let padded: Vec<&str> = padded.iter().map(String::as_str).collect();

        let normalized = normalize_columns(dataset_with(&padded));
        assert_eq!(normalized.columns(), EXPECTED_COLUMNS.map(String::from).as_slice());
    }

    #[test]
    fn test_full_schema_drops_extras() {
        let mut columns: Vec<&str> = vec!["extra"];
        columns.extend(EXPECTED_COLUMNS.iter());

        let normalized = normalize_columns(dataset_with(&columns));
        assert!(!normalized.has_column("extra"));
        assert_eq!(normalized.columns().len(), 21);
    }

    #[test]
    fn test_partial_schema_passes_through() {
        let normalized = normalize_columns(dataset_with(&["latitud", " region", "otra"]));
        assert_eq!(
            normalized.columns(),
            &["latitud".to_string(), "region".to_string(), "otra".to_string()]
        );
    }

    #[test]
    fn test_output_order_puts_extras_last() {
        let dataset = dataset_with(&["otra", "latitud", "notas", "region"]);
        let reordered = reorder_output_columns(&dataset);

        assert_eq!(
            reordered.columns(),
            &[
                "region".to_string(),
                "latitud".to_string(),
                "otra".to_string(),
                "notas".to_string()
            ]
        );
        assert_eq!(reordered.value(0, "notas"), Some(&Cell::Text("v_notas".into())));
    }

    #[test]
    fn test_repeated_names_are_all_kept() {
        // Two columns can share a name once surrounding spaces are trimmed
        let normalized = normalize_columns(dataset_with(&["comuna", "region", " comuna"]));
        let reordered = reorder_output_columns(&normalized);

        assert_eq!(
            reordered.columns(),
            &["region".to_string(), "comuna".to_string(), "comuna".to_string()]
        );
        assert_eq!(reordered.records()[0].cells().len(), 3);
    }
}
