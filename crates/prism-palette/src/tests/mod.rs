// ABOUTME: Cross-module tests for the palette engine
// ABOUTME: Covers preview sessions, persistence backends, and emitted log events
