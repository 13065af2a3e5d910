//! Report rendering for the `hfbox` command.
//!
//! Every command loads a cell document, builds its boxes and prints face
//! data either as plain text or as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hfbox::{CellDocument, FaceAnchor, FaceDirection, RectBox};

/// Load a `.toml` or `.json` cell document.
pub fn load_document(path: &Path) -> Result<CellDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let doc = match ext.to_lowercase().as_str() {
        "toml" => CellDocument::from_toml(&text)?,
        "json" => CellDocument::from_json(&text)?,
        _ => anyhow::bail!("Unknown document format: {}", ext),
    };
    tracing::debug!(path = %path.display(), boxes = doc.boxes.len(), "loaded document");
    Ok(doc)
}

/// Load a document and build its boxes.
pub fn load_boxes(path: &Path) -> Result<Vec<RectBox>> {
    Ok(load_document(path)?.build()?)
}

/// Find a box by name.
pub fn find_box<'a>(boxes: &'a [RectBox], name: &str) -> Result<&'a RectBox> {
    boxes
        .iter()
        .find(|b| b.name() == name)
        .with_context(|| format!("no box named {:?}", name))
}

/// One line per box: name, unit, normalized corner and size.
pub fn render_info(boxes: &[RectBox]) -> String {
    let mut out = format!("{} box(es)\n", boxes.len());
    for b in boxes {
        let c = b.corner();
        let s = b.size();
        out.push_str(&format!(
            "  {} [{}]: corner ({}, {}, {}) size ({}, {}, {})\n",
            b.name(),
            b.unit(),
            c.x,
            c.y,
            c.z,
            s.x,
            s.y,
            s.z
        ));
    }
    out
}

/// Face center as one comma-separated line.
pub fn render_point(b: &RectBox, direction: &str) -> Result<String> {
    Ok(b.face_point_named(direction)?.join(", "))
}

/// Edge points `P0, P1, P0, P2`, one per line.
pub fn render_edge(b: &RectBox, direction: &str) -> Result<String> {
    let lines: Vec<String> = b
        .face_edge_named(direction)?
        .iter()
        .map(|p| p.join(", "))
        .collect();
    Ok(lines.join("\n"))
}

/// Anchors for every face of every box.
pub fn collect_anchors(boxes: &[RectBox]) -> Vec<FaceAnchor> {
    boxes.iter().flat_map(RectBox::anchors).collect()
}

/// Human-readable anchor listing.
pub fn render_anchors(anchors: &[FaceAnchor]) -> String {
    let mut out = String::new();
    for a in anchors {
        let [e0, e1] = &a.edges;
        out.push_str(&format!(
            "{}.{}: point ({})\n  edge ({}) -> ({})\n  edge ({}) -> ({})\n",
            a.object,
            a.direction,
            a.point.join(", "),
            e0.start.join(", "),
            e0.end.join(", "),
            e1.start.join(", "),
            e1.end.join(", ")
        ));
    }
    out
}

/// Anchors as pretty JSON.
pub fn render_anchors_json(anchors: &[FaceAnchor]) -> Result<String> {
    Ok(serde_json::to_string_pretty(anchors)?)
}

/// Master/slave face pairs for periodic boundaries on `b`.
pub fn periodic_pairs(b: &RectBox) -> Vec<(FaceAnchor, FaceAnchor)> {
    [FaceDirection::Front, FaceDirection::Right]
        .into_iter()
        .map(|master| (b.face_anchor(master), b.face_anchor(master.opposite())))
        .collect()
}
