//! CSV readers for the student and club tables.
//!
//! Expected headers:
//!
//! ```text
//! StudentID,Name,Interest1,Interest2,Interest3
//! ClubName,RelatedInterest
//! ```
//!
//! Empty interest cells are read as missing.
use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::Result;
use crate::model::{Club, Student, StudentId};

#[derive(Debug, Deserialize)]
struct StudentRow {
    #[serde(rename = "StudentID")]
    id: StudentId,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Interest1")]
    interest1: Option<String>,
    #[serde(rename = "Interest2")]
    interest2: Option<String>,
    #[serde(rename = "Interest3")]
    interest3: Option<String>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student::new(row.id, row.name, [row.interest1, row.interest2, row.interest3])
    }
}

/// Read the student table from any reader.
pub fn students_from_reader<R: Read>(reader: R) -> Result<Vec<Student>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut students = Vec::new();
    for row in rdr.deserialize::<StudentRow>() {
        students.push(row?.into());
    }
    debug!("read {} students", students.len());
    Ok(students)
}

/// Read the club table from any reader.
pub fn clubs_from_reader<R: Read>(reader: R) -> Result<Vec<Club>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut clubs = Vec::new();
    for row in rdr.deserialize::<Club>() {
        clubs.push(row?);
    }
    debug!("read {} clubs", clubs.len());
    Ok(clubs)
}

/// Read the student table from a CSV file.
pub fn read_students<P: AsRef<Path>>(path: P) -> Result<Vec<Student>> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    students_from_reader(file)
}

/// Read the club table from a CSV file.
pub fn read_clubs<P: AsRef<Path>>(path: P) -> Result<Vec<Club>> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    clubs_from_reader(file)
}
