//! Tab-separated report of sampled phantom instances
//!
//! One row per value: `instance section tissue label quantity value`.
//! Shape rows leave the tissue columns as `-`.

use crate::engine::PhantomSample;
use crate::io::error::Result;
use std::io::Write;

/// Column names of the report
pub const HEADER: [&str; 6] = ["instance", "section", "tissue", "label", "quantity", "value"];

/// Write the header row
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_header<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", HEADER.join("\t"))?;
    Ok(())
}

/// Write every value of one instance
///
/// Scattering is reported at each of `wavelengths_nm` as `mu_sp@<λ>` and
/// `mu_s@<λ>`.
///
/// # Errors
///
/// Returns an error if the writer fails or a wavelength is invalid
pub fn write_instance<W: Write>(
    writer: &mut W,
    instance: usize,
    sample: &PhantomSample,
    wavelengths_nm: &[f64],
) -> Result<()> {
    writeln!(writer, "{instance}\tshape\t-\t-\tbreast_type\t{}", sample.category)?;
    writeln!(writer, "{instance}\tshape\t-\t-\tbreast_shape\t{}", sample.mode)?;
    for (name, value) in sample.shape.named() {
        writeln!(writer, "{instance}\tshape\t-\t-\t{name}\t{value}")?;
    }
    writeln!(writer, "{instance}\tshape\t-\t-\tdoPtosis\t{}", sample.shape.do_ptosis)?;
    writeln!(writer, "{instance}\tshape\t-\t-\tdoTurnTop\t{}", sample.shape.do_turn_top)?;

    for entry in &sample.tissues {
        let (tissue, label) = (entry.tissue, entry.tissue.label());

        if let Some(acoustic) = entry.acoustic {
            let rows = [
                ("sound_speed", acoustic.sound_speed),
                ("density", acoustic.density),
                ("alpha_coeff", acoustic.attenuation),
                ("alpha_power", acoustic.exponent),
            ];
            for (quantity, value) in rows {
                writeln!(writer, "{instance}\tacoustic\t{tissue}\t{label}\t{quantity}\t{value}")?;
            }
        }

        if let Some(params) = entry.scattering {
            let mut rows = vec![
                ("mu_sp_ref".to_owned(), params.reduced_scattering_ref),
                ("b".to_owned(), params.scattering_power),
                ("g".to_owned(), params.anisotropy),
            ];
            for &wavelength in wavelengths_nm {
                rows.push((format!("mu_sp@{wavelength}"), params.reduced_scattering(wavelength)?));
                rows.push((format!("mu_s@{wavelength}"), params.scattering_coefficient(wavelength)?));
            }
            for (quantity, value) in rows {
                writeln!(writer, "{instance}\toptical\t{tissue}\t{label}\t{quantity}\t{value}")?;
            }
        }
    }

    Ok(())
}
