//! Browser download of generated files.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, HtmlAnchorElement, Url};

pub fn export_file_name(employee_id: i64) -> String {
    format!("employee_{}_card.xlsx", employee_id)
}

/// Offer `bytes` to the user as a download named `file_name`.
pub fn save_bytes(bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = gloo::utils::document()
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    gloo::utils::body().append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(42), "employee_42_card.xlsx");
    }

    #[wasm_bindgen_test]
    fn test_save_bytes_cleans_up_anchor() {
        save_bytes(b"PK", "test.xlsx").unwrap();
        let leftover = gloo::utils::document()
            .query_selector("a[download='test.xlsx']")
            .unwrap();
        assert!(leftover.is_none());
    }
}
