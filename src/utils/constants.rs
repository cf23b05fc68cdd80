/// Decimales del NEAR (1 NEAR = 10^24 yoctoNEAR)
pub const NEAR_NOMINATION_EXP: usize = 24;

/// Gas por defecto de una llamada a función (30 TGas)
pub const DEFAULT_FUNCTION_CALL_GAS: &str = "30000000000000";

/// Gas para desplegar un proyecto desde el factory (300 TGas, máximo por transacción)
pub const CREATE_PROJECT_GAS: &str = "300000000000000";

/// Milisegundos que el banner de error permanece visible
pub const ERROR_BANNER_TIMEOUT_MS: u32 = 6_000;
