//! Source text rendering for each loader kind

use super::target::ImportTarget;
use crate::utils::path_depth;

/// Minimal HTML5 page loading each script as a native module
pub fn html_document<'a>(lang: &str, script_srcs: impl Iterator<Item = &'a str>) -> String {
    let scripts: String = script_srcs
        .map(|src| format!("<script type=\"module\" src=\"{}\"></script>", src))
        .collect();

    format!(
        "<!DOCTYPE html><html lang=\"{}\"><head><meta charset=\"UTF-8\" />{}</head></html>",
        lang, scripts
    )
}

/// Self-invoking async block awaiting one dynamic import per input
pub fn dynamic_import_script<'a>(url_resolver: &str, inputs: impl Iterator<Item = &'a str>) -> String {
    let imports = inputs
        .map(ImportTarget::classify)
        .map(|target| format!("await import({})", target.runtime_reference(url_resolver)))
        .collect::<Vec<_>>()
        .join(";");

    format!("(async()=>{{{}}})();", imports)
}

/// Static imports relative to the loader's own output location
///
/// The `../` prefix follows the depth of `loader_file_name`, not of the inputs.
pub fn static_inject_script<'a>(loader_file_name: &str, inputs: impl Iterator<Item = &'a str>) -> String {
    let prefix = "../".repeat(path_depth(loader_file_name));

    inputs
        .map(|input| format!("import \"{}{}\"", prefix, input))
        .collect::<Vec<_>>()
        .join(";")
}

/// One root-relative static import per line
pub fn service_worker_script<'a>(inputs: impl Iterator<Item = &'a str>) -> String {
    inputs
        .map(ImportTarget::classify)
        .map(|target| format!("import \"{}\";", target.root_path()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_html_document() {
        assert_eq!(
            html_document("en", ["a.js", "b.js"].into_iter()),
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"UTF-8\" />\
             <script type=\"module\" src=\"a.js\"></script>\
             <script type=\"module\" src=\"b.js\"></script></head></html>"
        );
    }

    #[test]
    fn test_dynamic_import_script_empty() {
        assert_eq!(dynamic_import_script("chrome.runtime.getURL", std::iter::empty()), "(async()=>{})();");
    }

    #[test]
    fn test_static_inject_depth_zero() {
        assert_eq!(
            static_inject_script("content.js", ["lib.js", "vendor.js"].into_iter()),
            "import \"lib.js\";import \"vendor.js\""
        );
    }

    #[test]
    fn test_service_worker_script_empty() {
        assert_eq!(service_worker_script(std::iter::empty()), "");
    }
}
