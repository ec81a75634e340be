/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// HTTP transport with credential injection and exact status checks
pub mod http;
/// Request payloads for create and partial-update calls
pub mod requests;
/// Response envelopes
pub mod responses;
/// Decoding helpers
pub mod utils;
