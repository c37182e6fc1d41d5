// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! File selection, content references and playback.

pub mod content;
pub mod playback;
pub mod selection;
