// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the Video Shelf application.

pub mod filter_bar;
pub mod player;
pub mod upload;
pub mod video_list;
