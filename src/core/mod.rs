//! Core building blocks: conversion parameters and the sequential
//! HDF-to-TIFF pipeline. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod pipeline;
