// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Chemical potential μ [eV].
pub const CHEMICAL_POTENTIAL_EV: f64 = 2.12;

/// Boltzmann factor k_B [J/K] the sample tables are computed with.
pub const BOLTZMANN_J_PER_K: f64 = 1.69e-23;

/// Electron-volt to joule conversion factor.
pub const EV_TO_J: f64 = 1.6e-19;

// ---------------------------------------------------------------------------
// Fermi-Dirac occupation
// ---------------------------------------------------------------------------

/// Fermi-Dirac occupation probability of a state at `energy_ev` for the
/// chemical potential `mu_ev` and temperature `temperature_k`.
///
/// Energies are in electron-volts. The temperature is not range checked:
/// `T <= 0` yields whatever IEEE arithmetic produces (0, 1 or NaN).
pub fn fermi_dirac(energy_ev: f64, mu_ev: f64, temperature_k: f64) -> f64 {
    let exponent = (energy_ev * EV_TO_J - mu_ev * EV_TO_J) / (BOLTZMANN_J_PER_K * temperature_k);
    1.0 / (exponent.exp() + 1.0)
}
