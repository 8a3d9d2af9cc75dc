//! Test vector types for crc.json
//!
//! CRC-16/DNP parameters, lookup-table spot checks, and calculate/check
//! vectors.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CrcParameters {
    pub polynomial: String,
    pub reflected_polynomial: String,
    pub initial_value: u64,
    pub complement_result: bool,
    pub storage: String,
    pub check_string: String,
    pub check_value: String,
}

#[derive(Debug, Deserialize)]
pub struct TableSpotCheck {
    pub index: u64,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct CalculateVector {
    pub description: String,
    pub content: String,
    pub crc: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckVector {
    pub description: String,
    pub buffer: String,
    pub valid: bool,
}

#[derive(Debug, Deserialize)]
pub struct CrcVectors {
    pub description: String,
    pub source: String,
    pub parameters: CrcParameters,
    pub table_spot_checks: Vec<TableSpotCheck>,
    pub calculate_vectors: Vec<CalculateVector>,
    pub check_vectors: Vec<CheckVector>,
}

pub fn load() -> CrcVectors {
    let json = include_str!("../../../.test-vectors/crc.json");
    serde_json::from_str(json).expect("Failed to deserialize crc.json")
}
