//! Response compression layer.

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::{And, DefaultPredicate, NotForContentType, Predicate};

/// Content type of XLSX exports, whose entries are already deflated.
const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds a gzip compression layer that leaves spreadsheet downloads alone.
pub fn build_compression_layer() -> CompressionLayer<And<DefaultPredicate, NotForContentType>> {
    let predicate = DefaultPredicate::new().and(NotForContentType::const_new(XLSX_CONTENT_TYPE));
    CompressionLayer::new().compress_when(predicate)
}
