// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: classrooms, the catalog that groups them, and session state.

pub mod catalog;
pub mod classroom;
pub mod session;
