/// Transcript scale, descending thresholds; first match wins.
const GRADE_SCALE: [(f64, &str, f64); 11] = [
    (97.0, "A+", 4.0),
    (93.0, "A", 4.0),
    (90.0, "A-", 3.7),
    (87.0, "B+", 3.3),
    (83.0, "B", 3.0),
    (80.0, "B-", 2.7),
    (77.0, "C+", 2.3),
    (73.0, "C", 2.0),
    (70.0, "C-", 1.7),
    (67.0, "D+", 1.3),
    (65.0, "D", 1.0),
];

///
/// Letter grade on the transcript scale.
///
pub fn letter_grade(percentage: f64) -> &'static str {
    GRADE_SCALE
        .iter()
        .find(|(threshold, _, _)| percentage >= *threshold)
        .map(|(_, letter, _)| *letter)
        .unwrap_or("F")
}

///
/// Grade point (0.0 - 4.0) on the transcript scale,
/// used for quality points and GPA.
///
pub fn grade_point(percentage: f64) -> f64 {
    GRADE_SCALE
        .iter()
        .find(|(threshold, _, _)| percentage >= *threshold)
        .map(|(_, _, point)| *point)
        .unwrap_or(0.0)
}

///
/// Coarser letter scale used by the per-assignment grading screen.
///
/// Deliberately distinct from [letter_grade]: the grading screen
/// shows plain A-F bands (90/80/70/60), the transcript scale keeps
/// plus/minus steps. Only the transcript scale feeds GPA.
///
pub fn assignment_letter_grade(percentage: f64) -> &'static str {
    match percentage {
        p if p >= 90.0 => "A",
        p if p >= 80.0 => "B",
        p if p >= 70.0 => "C",
        p if p >= 60.0 => "D",
        _ => "F",
    }
}
