//! Sequential CRUD walkthrough over the species API.
//!
//! # Design
//! One linear routine: GET the collection, POST a fixed draft, PUT a fixed
//! rename of the created record, DELETE it. Every step runs only after the
//! previous one finished — each round-trip is a single blocking
//! [`HttpTransport::execute`] call, so ordering holds by construction. The
//! first failure of any kind aborts the remaining steps via `?`; the caller
//! owns printing the failure. Report lines go to the `Write` sink the caller
//! provides, which keeps the exact console text assertable in tests.

use std::fmt;
use std::io::{self, Write};

use crate::client::SpeciesClient;
use crate::error::ApiError;
use crate::http::HttpTransport;
use crate::types::Species;

/// Name the walkthrough creates the sample species with.
pub const SAMPLE_NAME: &str = "Lobo Gris";

/// Name the walkthrough renames the sample species to.
pub const UPDATED_NAME: &str = "Lobo Gris Actualizado";

/// A walkthrough failure: either an API step failed or the report could not
/// be written.
#[derive(Debug)]
pub enum WalkthroughError {
    Api(ApiError),
    Output(io::Error),
}

impl fmt::Display for WalkthroughError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkthroughError::Api(e) => e.fmt(f),
            WalkthroughError::Output(e) => write!(f, "console output failed: {e}"),
        }
    }
}

impl std::error::Error for WalkthroughError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalkthroughError::Api(e) => Some(e),
            WalkthroughError::Output(e) => Some(e),
        }
    }
}

impl From<ApiError> for WalkthroughError {
    fn from(e: ApiError) -> Self {
        WalkthroughError::Api(e)
    }
}

impl From<io::Error> for WalkthroughError {
    fn from(e: io::Error) -> Self {
        WalkthroughError::Output(e)
    }
}

/// Run the four CRUD steps in order, writing the report to `out`.
///
/// Step banners are written before the step's request goes out, so a failed
/// step leaves its banner behind. The update and delete target exactly the
/// code the create step came back with. On error the completed steps'
/// output has already been written; nothing is rolled back or retried.
pub fn run<T, W>(
    client: &SpeciesClient,
    transport: &mut T,
    out: &mut W,
) -> Result<(), WalkthroughError>
where
    T: HttpTransport,
    W: Write,
{
    writeln!(out, "--- 1. Obtener todas las especies (GET) ---")?;
    let response = transport.execute(client.build_list())?;
    let species = client.parse_list(response)?;
    writeln!(out, "Especies obtenidas: {}", species.len())?;

    writeln!(out)?;
    writeln!(out, "--- 2. Inserción de una nueva especie (POST) ---")?;
    let draft = Species::draft(SAMPLE_NAME);
    let response = transport.execute(client.build_create(&draft)?)?;
    let mut created = client.parse_create(response)?;
    writeln!(
        out,
        "Especie creada con Codigo: {} y NombreComun: {}",
        created.code, created.common_name
    )?;

    writeln!(out)?;
    writeln!(out, "--- 3. Actualización de la especie (PUT) ---")?;
    created.common_name = UPDATED_NAME.to_string();
    let response = transport.execute(client.build_update(&created)?)?;
    let updated = client.parse_update(response)?;
    writeln!(out, "Especie actualizada a NombreComun: {}", updated.common_name)?;

    writeln!(out)?;
    writeln!(out, "--- 4. Eliminación de la especie (DELETE) ---")?;
    let response = transport.execute(client.build_delete(created.code))?;
    client.parse_delete(response)?;
    writeln!(out, "Especie con Codigo: {} eliminada.", created.code)?;

    Ok(())
}
