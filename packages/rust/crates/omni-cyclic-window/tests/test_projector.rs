//! Tests for WindowProjector.

use omni_cyclic_window::WindowProjector;

#[test]
fn test_project_from_start() {
    assert_eq!(WindowProjector::project(&[1, 2, 3, 4], 3, 0), vec![1, 2, 3]);
    assert_eq!(WindowProjector::project(&[1, 2, 3, 4], 3, 2), vec![3, 4, 1]);
}

#[test]
fn test_project_empty_sequence_ignores_size() {
    let empty: [u8; 0] = [];
    assert!(WindowProjector::project(&empty, 5, 0).is_empty());
    assert!(WindowProjector::project(&empty, 5, 7).is_empty());
    assert!(WindowProjector::project_signed(&empty, 5, -7).is_empty());
}

#[test]
fn test_project_zero_size_is_empty() {
    assert!(WindowProjector::project(&[1, 2, 3], 0, 1).is_empty());
}

#[test]
fn test_project_repeats_whole_sequence() {
    assert_eq!(
        WindowProjector::project(&["a", "b", "c"], 9, 0),
        vec!["a", "b", "c", "a", "b", "c", "a", "b", "c"]
    );
    assert_eq!(WindowProjector::project(&[1, 2], 5, 1), vec![2, 1, 2, 1, 2]);
}

#[test]
fn test_project_start_beyond_len() {
    assert_eq!(WindowProjector::project(&[1, 2, 3, 4], 2, 9), vec![2, 3]);
}

#[test]
fn test_project_signed_negative_start_counts_from_end() {
    let seq = [1, 2, 3, 4];
    assert_eq!(WindowProjector::project_signed(&seq, 3, -1), vec![4, 1, 2]);
    assert_eq!(WindowProjector::project_signed(&seq, 3, -4), vec![1, 2, 3]);
    assert_eq!(WindowProjector::project_signed(&seq, 3, -9), vec![4, 1, 2]);
    assert_eq!(WindowProjector::project_signed(&seq, 3, 5), vec![2, 3, 4]);
    // i64::MIN is a multiple of the length.
    assert_eq!(WindowProjector::project_signed(&seq, 2, i64::MIN), vec![1, 2]);
}

#[test]
fn test_project_returns_independent_vectors() {
    let seq = vec![String::from("x"), String::from("y")];
    let mut first = WindowProjector::project(&seq, 2, 0);
    first[0].push('!');
    let second = WindowProjector::project(&seq, 2, 0);
    assert_eq!(second, vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn test_indices_match_projection() {
    let seq = ['p', 'q', 'r'];
    let via_indices: Vec<char> = WindowProjector::indices(seq.len(), 7, 2)
        .map(|i| seq[i])
        .collect();
    assert_eq!(via_indices, WindowProjector::project(&seq, 7, 2));
}
