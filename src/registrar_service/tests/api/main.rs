mod cors;
mod helpers;
mod signup;
