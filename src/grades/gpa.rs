use super::{grade_point, letter_grade};
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub code: String,
    pub title: String,
    pub credits: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "PascalCase")]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
}

///
/// One graded course. Letter grade, grade point and quality
/// points are derived from the percentage, never stored.
///
/// `percentage == 0` means "not graded yet" and is excluded
/// from every GPA aggregate.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub course: CourseRef,
    pub percentage: f64,
    pub year: i32,
    pub semester: Semester,
}

impl GradeRecord {
    pub fn letter_grade(&self) -> &'static str {
        letter_grade(self.percentage)
    }

    pub fn grade_point(&self) -> f64 {
        grade_point(self.percentage)
    }

    pub fn quality_points(&self) -> f64 {
        self.grade_point() * self.course.credits
    }
}

///
/// Cumulative GPA over all graded records.
///
/// GPA = sum of quality points / sum of credits, over records with
/// `percentage > 0`. Returns 0.0 when the filtered credit sum is 0.
/// Invariant to record order.
///
pub fn compute_gpa(records: &[GradeRecord]) -> f64 {
    let graded = records.iter().filter(|record| record.percentage > 0.0);

    let mut quality_points = 0.0;
    let mut credits = 0.0;
    for record in graded {
        quality_points += record.quality_points();
        credits += record.course.credits;
    }

    if credits > 0.0 {
        quality_points / credits
    } else {
        0.0
    }
}

///
/// GPA restricted to courses taken in one semester, matched on the
/// record's explicit `(year, semester)` fields.
///
pub fn compute_semester_gpa(records: &[GradeRecord], year: i32, semester: Semester) -> f64 {
    let semester_records = records
        .iter()
        .filter(|record| record.year == year && record.semester == semester)
        .cloned()
        .collect::<Vec<_>>();

    compute_gpa(&semester_records)
}
