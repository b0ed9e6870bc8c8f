//! Integration tests: write solver-layout records and read them back by name.

use ndarray::Array3;
use raw_io::{infer_stored_shape, interpret_raw_file, read_record, write_array, write_record, RawIoError};
use test_utils::{create_indexed_field, create_irrational_field, indexed_value, temp_run_dir};

#[test]
fn test_infer_u_snapshot_shape() {
    let shape = infer_stored_shape("snap.u.000000100.bin", 10, 8, 3);
    assert_eq!(shape.dims(), (3, 8, 11));
}

#[test]
fn test_infer_barotropic_u_is_single_layer() {
    let shape = infer_stored_shape("snap.ub.000000100.bin", 10, 8, 3);
    assert_eq!(shape.dims(), (1, 8, 11));

    let shape = infer_stored_shape("snap.vb.000000100.bin", 10, 8, 3);
    assert_eq!(shape.dims(), (1, 9, 10));
}

#[test]
fn test_read_restores_x_y_layer_order() {
    let dir = temp_run_dir("raw_io_");
    let (nx, ny, layers) = (10, 8, 2);
    let path = dir.path().join("snap.u.000000100.bin");

    let stored = Array3::from_shape_vec((layers, ny, nx + 1), create_indexed_field(layers, ny, nx + 1)).unwrap();
    write_array(&path, &stored).unwrap();

    let restored = interpret_raw_file(&path, nx, ny, layers).unwrap();
    assert_eq!(restored.dim(), (nx + 1, ny, layers));
    for i in 0..nx + 1 {
        for j in 0..ny {
            for k in 0..layers {
                assert_eq!(restored[[i, j, k]], indexed_value(k, j, i));
            }
        }
    }
}

#[test]
fn test_round_trip_is_bit_exact() {
    let dir = temp_run_dir("raw_io_");
    let (nx, ny, layers) = (7, 5, 3);
    let path = dir.path().join("snap.zeta.0000000001");

    let original = Array3::from_shape_vec(
        (layers, ny + 1, nx + 1),
        create_irrational_field(layers * (ny + 1) * (nx + 1)),
    )
    .unwrap();
    write_array(&path, &original).unwrap();

    let restored = interpret_raw_file(&path, nx, ny, layers).unwrap();
    let back = restored.reversed_axes();
    assert_eq!(back.dim(), original.dim());
    for (a, b) in back.iter().zip(original.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_free_surface_ignores_layer_count() {
    let dir = temp_run_dir("raw_io_");
    let path = dir.path().join("snap.eta.0000000050");
    write_record(&path, &create_indexed_field(1, 4, 6)).unwrap();

    let eta = interpret_raw_file(&path, 6, 4, 5).unwrap();
    assert_eq!(eta.dim(), (6, 4, 1));
    assert_eq!(eta[[5, 3, 0]], indexed_value(0, 3, 5));
}

#[test]
fn test_resolution_mismatch_is_reported() {
    let dir = temp_run_dir("raw_io_");
    let path = dir.path().join("snap.h.0000000050");
    write_record(&path, &create_indexed_field(2, 8, 10)).unwrap();

    match interpret_raw_file(&path, 10, 8, 3) {
        Err(RawIoError::ShapeMismatch { expected, found, .. }) => {
            assert_eq!(expected, vec![3, 8, 10]);
            assert_eq!(found, 160);
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_reported() {
    let dir = temp_run_dir("raw_io_");
    let path = dir.path().join("snap.h.missing");
    assert!(matches!(read_record(&path), Err(RawIoError::FileNotFound(p)) if p == path));
    assert!(matches!(
        interpret_raw_file(&path, 2, 2, 1),
        Err(RawIoError::FileNotFound(_))
    ));
}

#[test]
fn test_write_replaces_existing_file() {
    let dir = temp_run_dir("raw_io_");
    let path = dir.path().join("wind_x.bin");
    write_record(&path, &[1.0; 32]).unwrap();
    write_record(&path, &[2.0; 4]).unwrap();
    assert_eq!(read_record(&path).unwrap(), vec![2.0; 4]);
}
