use std::path::Path;

use challenge_types::{MeshGeometry, Triangle};
use tracing::{debug, instrument, warn};

use crate::errors::ParseError;

/// Bytes of free-form header text at the start of the file.
pub const HEADER_LEN: usize = 80;
/// Header plus the u32 triangle count.
pub const PREAMBLE_LEN: usize = HEADER_LEN + 4;
/// Normal (12) + three vertices (36) + attribute byte count (2).
pub const RECORD_LEN: usize = 50;

/// Decode a binary STL buffer.
///
/// The number of triangles read is `(len - 84) / 50`. The count stored in
/// the header is not trusted; when it disagrees a warning is logged and the
/// buffer length wins. Bytes after the last whole record are ignored.
///
/// Fails if the buffer cannot hold the preamble or if any normal or vertex
/// component is NaN or infinite. Nothing is returned on failure.
#[instrument(skip(bytes), fields(len = bytes.len()))]
pub fn parse_binary_stl(bytes: &[u8]) -> Result<MeshGeometry, ParseError> {
    if bytes.len() < PREAMBLE_LEN {
        return Err(ParseError::TooShort {
            len: bytes.len(),
            min: PREAMBLE_LEN,
        });
    }

    let declared_count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
    let body = &bytes[PREAMBLE_LEN..];
    let tri_count = body.len() / RECORD_LEN;
    let trailing = body.len() % RECORD_LEN;

    if declared_count as usize != tri_count {
        warn!(
            declared_count,
            tri_count, "STL header triangle count disagrees with buffer length"
        );
    }
    if trailing != 0 {
        debug!(trailing, "ignoring partial trailing STL record");
    }

    let mut triangles = Vec::with_capacity(tri_count);
    for (index, record) in body.chunks_exact(RECORD_LEN).enumerate() {
        triangles.push(read_record(record, index)?);
    }

    debug!(tri_count, "decoded binary STL");
    Ok(MeshGeometry {
        triangles,
        declared_count,
    })
}

/// Read a binary STL file from disk and decode it.
pub fn read_stl_file<P: AsRef<Path>>(path: P) -> Result<MeshGeometry, ParseError> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_binary_stl(&bytes)
}

/// Decode one 50-byte record. `record` must be exactly [`RECORD_LEN`] long.
fn read_record(record: &[u8], index: usize) -> Result<Triangle, ParseError> {
    let normal = read_vec3(record, 0, index, "normal")?;
    let v0 = read_vec3(record, 12, index, "vertex 0")?;
    let v1 = read_vec3(record, 24, index, "vertex 1")?;
    let v2 = read_vec3(record, 36, index, "vertex 2")?;
    // Bytes 48..50 are the attribute byte count, unused.
    Ok(Triangle::new(normal, v0, v1, v2))
}

fn read_vec3(
    record: &[u8],
    offset: usize,
    triangle: usize,
    field: &'static str,
) -> Result<[f32; 3], ParseError> {
    let v = [
        read_f32(record, offset),
        read_f32(record, offset + 4),
        read_f32(record, offset + 8),
    ];
    if v.iter().all(|c| c.is_finite()) {
        Ok(v)
    } else {
        Err(ParseError::NonFiniteValue { triangle, field })
    }
}

fn read_f32(data: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preamble(declared: u32) -> Vec<u8> {
        let mut buf = vec![0u8; HEADER_LEN];
        buf.extend_from_slice(&declared.to_le_bytes());
        buf
    }

    fn push_record(buf: &mut Vec<u8>, values: [f32; 12]) {
        for v in values {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    #[test]
    fn preamble_only_is_empty_mesh() {
        let mesh = parse_binary_stl(&preamble(0)).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.declared_count, 0);
    }

    #[test]
    fn buffer_of_83_bytes_is_rejected() {
        let err = parse_binary_stl(&[0u8; 83]).unwrap_err();
        assert!(matches!(err, ParseError::TooShort { len: 83, min: 84 }));
    }

    #[test]
    fn record_fields_land_in_place() {
        let mut buf = preamble(1);
        push_record(
            &mut buf,
            [0.0, 0.0, 1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        );
        let mesh = parse_binary_stl(&buf).unwrap();
        assert_eq!(mesh.len(), 1);
        let tri = mesh.triangles[0];
        assert_eq!(tri.normal, [0.0, 0.0, 1.0]);
        assert_eq!(tri.vertices[0], [1.0, 2.0, 3.0]);
        assert_eq!(tri.vertices[1], [4.0, 5.0, 6.0]);
        assert_eq!(tri.vertices[2], [7.0, 8.0, 9.0]);
    }

    #[test]
    fn declared_count_is_not_trusted() {
        let mut buf = preamble(1000);
        push_record(&mut buf, [0.0; 12]);
        push_record(&mut buf, [0.0; 12]);
        let mesh = parse_binary_stl(&buf).unwrap();
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.declared_count, 1000);
    }

    #[test]
    fn partial_trailing_record_is_dropped() {
        let mut buf = preamble(2);
        push_record(&mut buf, [0.0; 12]);
        buf.extend_from_slice(&[0u8; 49]);
        let mesh = parse_binary_stl(&buf).unwrap();
        assert_eq!(mesh.len(), 1);
    }

    #[test]
    fn nan_vertex_is_rejected() {
        let mut buf = preamble(2);
        push_record(&mut buf, [0.0; 12]);
        let mut values = [0.0; 12];
        values[7] = f32::NAN;
        push_record(&mut buf, values);
        let err = parse_binary_stl(&buf).unwrap_err();
        assert!(matches!(
            err,
            ParseError::NonFiniteValue {
                triangle: 1,
                field: "vertex 1"
            }
        ));
    }
}
