use strum::Display;

///
/// Academic standing derived from cumulative GPA.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AcademicStanding {
    #[strum(serialize = "Academic Probation")]
    AcademicProbation,
    #[strum(serialize = "Dean's List")]
    DeansList,
    #[strum(serialize = "Honor Roll")]
    HonorRoll,
    #[strum(serialize = "Good Standing")]
    GoodStanding,
}

impl AcademicStanding {
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa < 2.0 {
            Self::AcademicProbation
        } else if gpa >= 3.75 {
            Self::DeansList
        } else if gpa >= 3.5 {
            Self::HonorRoll
        } else {
            Self::GoodStanding
        }
    }
}
