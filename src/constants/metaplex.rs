//! Metaplex program constants

/// Candy Machine v1
pub const CANDY_MACHINE_V1: &str = "cndyAnrLdpjq1Ssp1z8xxDsB8dxe7u4HL5Nxi2K5WXZ";

/// Candy Machine v2
pub const CANDY_MACHINE_V2: &str = "cndy3Z4yapfJBmL3ShUp5exZKqR3z33thTzeNMm2gRZ";
