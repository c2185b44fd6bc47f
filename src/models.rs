use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dates are stored in the sheet as day-first display strings.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Department {
    Others,
    Physics,
    Biology,
    Chemistry,
    Maths,
    EnglishGpMalay,
    History,
    Geography,
    Computing,
    PsychologySociology,
    FoodScience,
    MediaStudiesArtDt,
    BusinessAccountingEconomics,
}

impl Department {
    pub const ALL: [Department; 13] = [
        Department::Others,
        Department::Physics,
        Department::Biology,
        Department::Chemistry,
        Department::Maths,
        Department::EnglishGpMalay,
        Department::History,
        Department::Geography,
        Department::Computing,
        Department::PsychologySociology,
        Department::FoodScience,
        Department::MediaStudiesArtDt,
        Department::BusinessAccountingEconomics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Others => "Others",
            Department::Physics => "Physics",
            Department::Biology => "Biology",
            Department::Chemistry => "Chemistry",
            Department::Maths => "Maths",
            Department::EnglishGpMalay => "English/G.P/Malay",
            Department::History => "History",
            Department::Geography => "Geography",
            Department::Computing => "Computing",
            Department::PsychologySociology => "Psychology/Sociology",
            Department::FoodScience => "Food Science",
            Department::MediaStudiesArtDt => "Media Studies / ART / D&T",
            Department::BusinessAccountingEconomics => "Business / Accounting / Economics",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown department: {s}"))
    }
}

impl TryFrom<String> for Department {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Department> for String {
    fn from(d: Department) -> String {
        d.as_str().to_string()
    }
}

/// The three bookable slots of a classroom day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    EarlyMorning,
    LateMorning,
    Afternoon,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] =
        [TimeSlot::EarlyMorning, TimeSlot::LateMorning, TimeSlot::Afternoon];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "08:00 - 09:45",
            TimeSlot::LateMorning => "10:15 - 12:15",
            TimeSlot::Afternoon => "13:15 - 15:15",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown time slot: {s}"))
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(t: TimeSlot) -> String {
        t.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Facility {
    Smartboard,
    Chromebooks,
    Visualizer,
    RecordingTerminal,
    InternetAccess,
    Others,
}

impl Facility {
    pub const ALL: [Facility; 6] = [
        Facility::Smartboard,
        Facility::Chromebooks,
        Facility::Visualizer,
        Facility::RecordingTerminal,
        Facility::InternetAccess,
        Facility::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Facility::Smartboard => "Smartboard",
            Facility::Chromebooks => "Chromebooks",
            Facility::Visualizer => "Visualizer",
            Facility::RecordingTerminal => "Recording Terminal",
            Facility::InternetAccess => "Internet Access",
            Facility::Others => "Others",
        }
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facility::ALL
            .into_iter()
            .find(|fa| fa.as_str() == s)
            .ok_or_else(|| format!("unknown facility: {s}"))
    }
}

impl TryFrom<String> for Facility {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Facility> for String {
    fn from(fa: Facility) -> String {
        fa.as_str().to_string()
    }
}

/// Facilities are persisted as a single comma-joined sheet column.
pub fn join_facilities(facilities: &[Facility]) -> String {
    facilities
        .iter()
        .map(Facility::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn parse_facilities(s: &str) -> Result<Vec<Facility>, String> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',').map(|part| part.trim().parse()).collect()
}

/// One row of the booking sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub department: Department,
    /// Day-first display string, see [`DATE_FORMAT`].
    pub date: String,
    pub time_slot: TimeSlot,
    pub facilities: Vec<Facility>,
}

/// A submitted booking, before validation and id assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBooking {
    pub name: String,
    pub department: Department,
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

impl NewBooking {
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
