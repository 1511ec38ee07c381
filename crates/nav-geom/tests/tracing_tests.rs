// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Rejections and geometric early-outs leave a structured trail.

use std::io;
use std::sync::{Arc, Mutex};

use nav_geom::query::{intersect_seg_seg_2d, intersect_segment_poly_2d, overlap_poly_poly_2d};
use nav_geom::{IndexedPolygon, Vec3, VertexSlice};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("capture buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    sink.contents()
}

#[test]
fn buffer_rejections_log_offending_values() {
    let logs = capture(|| {
        let flat = [0.0_f32; 7];
        assert!(VertexSlice::from_flat(&flat).is_err());
        let pool = [Vec3::ZERO, Vec3::UNIT_X, Vec3::UNIT_Z];
        assert!(IndexedPolygon::try_new(&[0, 1, 9], VertexSlice::new(&pool)).is_err());
    });
    assert!(logs.contains("rejecting ragged vertex buffer"), "{logs}");
    assert!(logs.contains("len=7"), "{logs}");
    assert!(logs.contains("index out of range"), "{logs}");
    assert!(logs.contains("index=9"), "{logs}");
}

#[test]
fn geometric_early_outs_are_traced() {
    let square = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 0.0),
    ];
    let far: Vec<Vec3> = square.iter().map(|v| v.add(&Vec3::new(5.0, 0.0, 0.0))).collect();
    let logs = capture(|| {
        let poly = VertexSlice::new(&square);
        assert!(intersect_segment_poly_2d(
            &Vec3::new(-1.0, 0.0, -0.5),
            &Vec3::new(2.0, 0.0, -0.5),
            poly
        )
        .is_none());
        assert!(!overlap_poly_poly_2d(poly, VertexSlice::new(&far)));
        assert!(intersect_seg_seg_2d(
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(1.0, 0.0, 0.0),
            &Vec3::new(0.0, 0.0, 1.0),
            &Vec3::new(1.0, 0.0, 1.0),
        )
        .is_none());
    });
    assert!(logs.contains("segment parallel to and outside polygon edge"), "{logs}");
    assert!(logs.contains("separating axis found"), "{logs}");
    assert!(logs.contains("segments parallel or degenerate"), "{logs}");
}
