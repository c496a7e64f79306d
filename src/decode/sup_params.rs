// src/decode/sup_params.rs
use crate::decode::{nul_fields, text_field};
use crate::diag::Diagnostics;
use crate::model::SupplierInfo;

const SECTION: &str = "SupParams";

/// SupParams is seven NUL-delimited text fields in fixed order.
pub(crate) fn decode(payload: &[u8], diag: &mut dyn Diagnostics) -> SupplierInfo {
    let fields = nul_fields(payload);

    SupplierInfo {
        supplier: text_field(&fields, 0, SECTION, "supplier", diag),
        instrument_name: text_field(&fields, 1, SECTION, "instrument name", diag),
        instrument_serial: text_field(&fields, 2, SECTION, "instrument serial", diag),
        module_name: text_field(&fields, 3, SECTION, "module name", diag),
        module_serial: text_field(&fields, 4, SECTION, "module serial", diag),
        software_version: text_field(&fields, 5, SECTION, "software version", diag),
        other_info: text_field(&fields, 6, SECTION, "other info", diag),
    }
}
