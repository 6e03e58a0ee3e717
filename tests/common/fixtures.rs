#![allow(dead_code)]

use report_types::Record;
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "id,nombre,email,ciudad";

/// Write a CSV source with the standard header followed by `rows`.
pub fn csv_source(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    writeln!(file, "{}", HEADER).expect("write header");
    for row in rows {
        writeln!(file, "{}", row).expect("write row");
    }
    file.flush().expect("flush csv");
    file
}

/// Seven clients: 3 in Madrid, 2 in Barcelona, 1 in Valencia, 1 in Sevilla.
pub fn seven_clients_csv() -> NamedTempFile {
    csv_source(&[
        "1,Ana García,ana@correo.es,Madrid",
        "2,Jordi Puig,jordi@correo.es,Barcelona",
        "3,Luis Martín,luis@correo.es,Madrid",
        "4,Marta Soler,marta@correo.es,Valencia",
        "5,Núria Vidal,nuria@correo.es,Barcelona",
        "6,Pedro Sanz,pedro@correo.es,Madrid",
        "7,Rocío Ortega,rocio@correo.es,Sevilla",
    ])
}

/// `n` synthetic records cycling through ten cities.
pub fn synthetic_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            Record::new(
                i as i32 + 1,
                format!("Cliente {}", i + 1),
                format!("cliente{}@test.com", i + 1),
                format!("Ciudad {}", i % 10),
            )
        })
        .collect()
}
