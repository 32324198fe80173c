use polyrec_core::{input::Document, points, report, verify};

const DOCUMENT: &str = r#"{
    "keys": { "n": 4, "k": 3 },
    "1": { "base": "10", "value": "12" },
    "2": { "base": "2", "value": "10001" },
    "3": { "base": "16", "value": "18" },
    "4": { "base": "36", "value": "x" }
}"#;

fn main() {
    let doc =
        Document::from_json(DOCUMENT).expect("document should parse");

    let coeffs = polyrec_core::reconstruct(&doc)
        .expect("reconstruction should succeed");
    print!("{}", report::render(&coeffs));

    let selection =
        points::select(&doc).expect("selection should succeed");
    for finding in verify::cross_validate(&coeffs, selection.spare()) {
        println!("spare share disagrees: {finding}");
    }
}
