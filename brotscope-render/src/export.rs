//! PNG snapshot of the current frame with the view embedded as tEXt chunks.

use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use brotscope_core::ViewBounds;

use crate::buffer::PixelBuffer;

/// View parameters recorded alongside an exported frame.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotMetadata {
    pub bounds: ViewBounds,
    pub iteration_cap: u32,
}

/// Write `buffer` as an RGBA PNG at `path`.
///
/// Buffer row 0 is the bottom of the view (`y_min`), so rows are written in
/// reverse to produce an upright image.
pub fn export_png(
    buffer: &PixelBuffer,
    path: &Path,
    metadata: &SnapshotMetadata,
) -> crate::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Brotscope".to_string())?;
    for (key, value) in metadata_pairs(metadata) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    let mut upright = Vec::with_capacity(buffer.width() as usize * buffer.height() as usize * 4);
    for y in (0..buffer.height()).rev() {
        upright.extend_from_slice(buffer.row(y));
    }
    png_writer.write_image_data(&upright)?;
    png_writer.finish()?;

    debug!(
        "Exported PNG {}x{} to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}

fn metadata_pairs(meta: &SnapshotMetadata) -> Vec<(String, String)> {
    let b = &meta.bounds;
    vec![
        ("Brotscope.XMin".into(), b.x_min.to_string()),
        ("Brotscope.XMax".into(), b.x_max.to_string()),
        ("Brotscope.YMin".into(), b.y_min.to_string()),
        ("Brotscope.YMax".into(), b.y_max.to_string()),
        ("Brotscope.IterationCap".into(), meta.iteration_cap.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Renderer;
    use brotscope_core::Viewport;

    fn snapshot() -> (PixelBuffer, SnapshotMetadata) {
        let vp = Viewport::with_default_bounds(16, 8).unwrap();
        let buffer = Renderer::default().compute(vp.tables(), vp.iteration_cap());
        let meta = SnapshotMetadata {
            bounds: vp.bounds(),
            iteration_cap: vp.iteration_cap(),
        };
        (buffer, meta)
    }

    #[test]
    fn export_embeds_view_and_flips_rows() {
        let (buffer, meta) = snapshot();
        let dir = std::env::temp_dir().join("brotscope_test_export");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("snapshot.png");
        export_png(&buffer, &path, &meta).expect("export should succeed");

        let decoder = png::Decoder::new(std::fs::File::open(&path).expect("file should exist"));
        let mut reader = decoder.read_info().expect("should read info");
        {
            let texts = &reader.info().uncompressed_latin1_text;
            assert!(texts
                .iter()
                .any(|t| t.keyword == "Software" && t.text == "Brotscope"));
            assert!(texts
                .iter()
                .any(|t| t.keyword == "Brotscope.IterationCap" && t.text == "50"));
            assert!(texts
                .iter()
                .any(|t| t.keyword == "Brotscope.XMin" && t.text == "-2.5"));
        }

        let mut data = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut data).expect("should decode");
        assert_eq!((frame.width, frame.height), (16, 8));
        // First PNG row is the last buffer row.
        assert_eq!(&data[..16 * 4], buffer.row(7));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let (buffer, meta) = snapshot();
        let path = std::env::temp_dir()
            .join("brotscope_no_such_dir")
            .join("nested")
            .join("x.png");
        assert!(export_png(&buffer, &path, &meta).is_err());
    }
}
