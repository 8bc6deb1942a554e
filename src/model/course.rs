/// Fixed parameters of the single course the league runs on.
#[derive(Debug, Clone)]
pub struct CourseProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub distance_km: f64,
    pub baseline_seconds: f64,
    pub course_rating: f64,
    pub exceptional_cut_rate: f64,
    pub max_session_rise: f64,
}

impl CourseProfile {
    /// Craigavon 5 km, CR 0: PD is pace against a 20:00 finish.
    pub fn craigavon() -> Self {
        Self {
            id: "CRAIGAVON",
            name: "Craigavon",
            distance_km: 5.0,
            baseline_seconds: 20.0 * 60.0,
            course_rating: 0.0,
            exceptional_cut_rate: 0.1,
            max_session_rise: 30.0,
        }
    }
}
