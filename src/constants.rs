//! # Constants and type definitions for skyobs
//!
//! This module centralizes the **physical constants**, **conversion factors** and
//! **type aliases** shared by the reducer, the magnitude law and the observer geometry.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants (AU, speed of light, Earth radius)
//! - Unit conversions (degrees ↔ radians, days ↔ seconds)
//! - Photometric defaults (H-G slope parameter)
//! - Core type aliases used across the crate

use std::collections::HashMap;
use std::sync::Arc;

use crate::observers::ParallaxConst;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Astronomical Unit in meters (IAU 2012)
pub const AU_METERS: f64 = AU * 1000.;

/// Number of hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

/// MJD epoch of B1900.0 (1900 January 0.5), origin of Newcomb's sidereal time
pub const B1900: f64 = 15019.5;

/// Earth equatorial radius in meters (GRS1980/WGS84)
pub const EARTH_MAJOR_AXIS: f64 = 6_378_137.0;

/// Earth polar radius in meters (GRS1980/WGS84)
pub const EARTH_MINOR_AXIS: f64 = 6_356_752.3;

/// Earth equatorial radius in kilometers, as used by the MPC parallax constants
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Astronomical Unit in kilometers (IAU 1976)
pub const AU_1976: f64 = 149_597_870.0;

/// Earth radius expressed in astronomical units, scale of the MPC ρcosφ/ρsinφ values
pub const ERAU: f64 = EARTH_RADIUS_KM / AU_1976;

/// Speed of light in m/s
pub const VLIGHT_METERS: f64 = 299_792_458.0;

/// Speed of light in km/s
pub const VLIGHT: f64 = VLIGHT_METERS / 1000.;

/// Speed of light in astronomical units per day
pub const VLIGHT_AU: f64 = VLIGHT / AU * SECONDS_PER_DAY;

/// Ratio of the sidereal day to the solar day
pub const SIDEREAL_RATE: f64 = 1.00273790934;

// -------------------------------------------------------------------------------------------------
// Photometry and validation
// -------------------------------------------------------------------------------------------------

/// Slope parameter assumed for minor planets when G is unknown
pub const DEFAULT_SLOPE_G: f64 = 0.15;

/// Slack accepted on acos/asin arguments by the checked reducer
pub const ACOS_TOLERANCE: f64 = 1e-12;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle in full circles (1 circle = 360°)
pub type Circle = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in meters
pub type Meter = f64;
/// Code identifying an observing site (typically the 3 character MPC obscode)
pub type SiteCode = String;

/// Modified Julian Date (days)
pub type MJD = f64;

/// Lookup table from site code to [`ParallaxConst`]
pub type ParallaxMap = HashMap<SiteCode, Arc<ParallaxConst>>;
