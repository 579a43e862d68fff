// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the campus map.

pub mod canvas;
pub mod details;
pub mod login;
pub mod map_view;
pub mod notification;
pub mod toolbar;
