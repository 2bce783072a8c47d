use penkit_core::segment_shapes;

fn lines(src: &[&str]) -> Vec<String> {
    src.iter().map(|s| s.to_string()).collect()
}

/// Three shapes drawing 40, 70, and 10 mm along the X axis.
fn three_shape_program() -> Vec<String> {
    lines(&[
        "; test plot",
        "G21",
        "M05 ; pen up",
        "G0 X0 Y0 F3000",
        "G4 P450",
        "M03 S90",
        "G1 X40 Y0",
        "G0",
        "G4 P450",
        "M05 ; pen up",
        "G0 X0 Y0 F3000",
        "M03 S90",
        "G1 X70 Y0",
        "G0",
        "G4 P450",
        "M05 ; pen up",
        "G0 X0 Y0 F3000",
        "M03 S90",
        "G1 X10 Y0",
        "G0",
        "M02",
    ])
}

#[test]
fn test_shape_invariants() {
    let program = three_shape_program();
    let shapes = segment_shapes(&program);
    assert_eq!(shapes.len(), 3);

    for shape in &shapes {
        assert!(shape.reposition_index < shape.start_index);
        assert!(shape.start_index <= shape.end_index);
        assert!(shape.length >= 0.0);
    }
    // Strictly increasing, non-overlapping records.
    for pair in shapes.windows(2) {
        assert!(pair[0].end_index < pair[1].reposition_index);
    }
}

#[test]
fn test_shape_lengths() {
    let program = three_shape_program();
    let shapes = segment_shapes(&program);

    assert_eq!(shapes[0].length, 40.0);
    assert_eq!(shapes[1].length, 70.0);
    assert_eq!(shapes[2].length, 10.0);
}

#[test]
fn test_diagonal_length() {
    let program = lines(&[
        "M05 ; pen up",
        "G0 X0 Y0",
        "M03",
        "G1 X3 Y4",
        "G0",
    ]);
    let shapes = segment_shapes(&program);
    assert_eq!(shapes.len(), 1);
    assert!((shapes[0].length - 5.0).abs() < 1e-9);
}

#[test]
fn test_carry_forward_across_single_axis_moves() {
    // X-only then Y-only moves: 10 right, then 10 up.
    let program = lines(&[
        "M05 ; pen up",
        "G0 X0 Y0",
        "M03",
        "G1 X10",
        "G1 Y10",
        "G0",
    ]);
    let shapes = segment_shapes(&program);
    assert!((shapes[0].length - 20.0).abs() < 1e-9);
}

#[test]
fn test_end_absorbs_following_pause() {
    let program = three_shape_program();
    let shapes = segment_shapes(&program);

    // First two shapes close with "G0" + "G4 P450"; the third has no pause.
    assert_eq!(shapes[0].end_index, 8);
    assert_eq!(shapes[1].end_index, 14);
    assert_eq!(program[shapes[2].end_index], "G0");
}

#[test]
fn test_zero_drawing_shape_is_valid() {
    let program = lines(&[
        "M05 ; pen up",
        "G0 X5 Y5",
        "M03",
        "G0",
    ]);
    let shapes = segment_shapes(&program);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].length, 0.0);
}

#[test]
fn test_no_pen_down_yields_empty_list() {
    let program = lines(&["G21", "G90", "G0 X10 Y10", "M02"]);
    assert!(segment_shapes(&program).is_empty());
}

#[test]
fn test_candidate_without_preceding_marker_is_dropped() {
    // M03 with no M05 anywhere before it.
    let program = lines(&[
        "G21",
        "M03 S90",
        "G1 X10 Y0",
        "G0",
    ]);
    assert!(segment_shapes(&program).is_empty());
}

#[test]
fn test_candidate_with_unresolvable_seed_is_dropped() {
    // The line after the M05 carries no coordinates to seed from.
    let program = lines(&[
        "M05 ; pen up",
        "G4 P450",
        "M03 S90",
        "G1 X10 Y0",
        "G0",
    ]);
    assert!(segment_shapes(&program).is_empty());
}

#[test]
fn test_open_ended_shape_closes_at_end_of_file() {
    let program = lines(&[
        "M05 ; pen up",
        "G0 X0 Y0",
        "M03",
        "G1 X10 Y0",
        "G1 X10 Y10",
    ]);
    let shapes = segment_shapes(&program);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].end_index, program.len() - 1);
    assert!((shapes[0].length - 20.0).abs() < 1e-9);
}

#[test]
fn test_segmentation_is_deterministic() {
    let program = three_shape_program();
    assert_eq!(segment_shapes(&program), segment_shapes(&program));
}
