/// Canonical RUEA-EFP column order
pub const EXPECTED_COLUMNS: [&str; 21] = [
    "año",
    "razon_social",
    "rut_razon_social",
    "nombre_establecimiento",
    "id_vu",
    "ciiu4",
    "id_ciiu4",
    "rubro_vu",
    "id_rubro_vu",
    "region",
    "provincia",
    "comuna",
    "id_comuna",
    "latitud",
    "longitud",
    "cantidad_toneladas",
    "unidad",
    "contaminantes",
    "id_contaminantes",
    "fuente_emisora_general",
    "id_fuente_emisora",
];

/// Column used as the filter key
pub const REGION_COLUMN: &str = "region";

/// Columns published with comma decimal separators
pub const NUMERIC_COMMA_COLUMNS: [&str; 3] = ["latitud", "longitud", "cantidad_toneladas"];

/// Region defaults
pub const CAPITAL_REGION: &str = "Metropolitana de Santiago";
pub const CAPITAL_REGION_ABBREV: &str = "RM";

/// Source portal
pub const SOURCE_URL: &str =
    "https://datosretc.mma.gob.cl/dataset/emisiones-al-aire-de-fuente-puntuales";
pub const SITE_BASE_URL: &str = "https://datosretc.mma.gob.cl";
pub const DOWNLOADABLE_EXTENSIONS: [&str; 3] = [".xls", ".xlsx", ".csv"];

/// Directory names, relative to the root directory
pub const DOWNLOAD_DIR: &str = "descargas_retc";
pub const OUTPUT_DIR: &str = "datos/filtrados_region";

/// Input file naming convention: ruea-efp-{YYYY}-ckan.{csv,xlsx}
pub const INPUT_PREFIX: &str = "ruea-efp-";
pub const INPUT_SUFFIXES: [&str; 2] = ["-ckan.csv", "-ckan.xlsx"];

/// Summary report
pub const SUMMARY_FILE: &str = "resumen_filtrado_ruea_efp.csv";

/// Status tags written to the summary report
pub const STATUS_OK: &str = "ok";
pub const STATUS_READ_ERROR: &str = "error_lectura";
pub const STATUS_PROCESS_ERROR: &str = "error_proceso";
pub const STATUS_SAVE_ERROR: &str = "error_guardado";

/// Input CSV delimiter
pub const INPUT_DELIMITER: u8 = b';';

/// Output CSV delimiter
pub const OUTPUT_DELIMITER: u8 = b',';

/// UTF-8 byte-order mark written ahead of CSV outputs
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// I/O defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Unix mode of downloaded files (rw-r--r--)
pub const DOWNLOAD_FILE_MODE: u32 = 0o644;
pub const USER_AGENT: &str = concat!("retc-processor/", env!("CARGO_PKG_VERSION"));
