//! Utilidades del sistema
//! 
//! Este módulo contiene el manejo de errores compartido por controladores
//! y rutas.

pub mod errors;
