//! CSS styles for the UI

/// Complete offline CSS styles
pub const CUSTOM_STYLES: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
        color: #eee;
        min-height: 100%;
    }

    .main-container {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
    }

    /* Title bar */
    .title-bar {
        display: flex;
        justify-content: space-between;
        align-items: center;
        height: 40px;
        padding: 0 16px;
        background: linear-gradient(to right, #020617, #0f172a);
        border-bottom: 1px solid rgba(34, 211, 238, 0.2);
    }
    .title-text {
        font-size: 14px;
        font-weight: 500;
        color: #22d3ee;
    }
    .title-mode {
        font-size: 11px;
        font-family: monospace;
        color: #6b7280;
    }

    /* Tabs and breadcrumb */
    .tab-bar {
        display: flex;
        align-items: center;
        gap: 4px;
        padding: 0 16px;
        background: rgba(15, 23, 42, 0.8);
        border-bottom: 1px solid rgba(34, 211, 238, 0.1);
    }
    .tab-item {
        padding: 10px 16px;
        font-size: 13px;
        color: #9ca3af;
        text-decoration: none;
        border-bottom: 2px solid transparent;
    }
    .tab-item:hover { color: white; }
    .tab-active {
        color: #22d3ee;
        border-bottom-color: #22d3ee;
    }
    .tab-separator { color: #4b5563; }
    .tab-link {
        margin-left: auto;
        font-family: monospace;
        font-size: 11px;
        color: #4b5563;
    }

    .content-area {
        max-width: 1152px;
        width: 100%;
        margin: 0 auto;
        padding: 20px;
        flex: 1;
    }

    /* Panels */
    .panel {
        padding: 24px;
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.05);
        color: #9ca3af;
    }
    .panel h2 { color: #e5e7eb; margin-bottom: 8px; }
    .panel p { margin-bottom: 16px; }
    .panel-loading { text-align: center; font-style: italic; }
    .panel-error { border: 1px solid rgba(220, 38, 38, 0.4); }

    /* Home toolbar */
    .toolbar {
        display: flex;
        gap: 16px;
        align-items: center;
        flex-wrap: wrap;
        margin-bottom: 16px;
    }
    .search-input, .field-input {
        padding: 10px 14px;
        border: 1px solid rgba(34, 211, 238, 0.3);
        border-radius: 8px;
        background: rgba(0, 0, 0, 0.3);
        color: #eee;
        font-size: 14px;
        outline: none;
    }
    .search-input { flex: 1; min-width: 200px; }
    .search-input:focus, .field-input:focus { border-color: #22d3ee; }
    .filter-group { display: flex; gap: 6px; }
    .chip {
        padding: 6px 12px;
        border-radius: 999px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: transparent;
        color: #9ca3af;
        font-size: 12px;
        cursor: pointer;
    }
    .chip-active {
        background: rgba(34, 211, 238, 0.2);
        border-color: #22d3ee;
        color: #22d3ee;
    }
    .toolbar-count { font-size: 12px; color: #6b7280; }

    /* Module cards */
    .module-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
        gap: 16px;
    }
    .module-card {
        display: flex;
        flex-direction: column;
        gap: 12px;
        padding: 16px;
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.08);
    }
    .module-card:hover { border-color: rgba(34, 211, 238, 0.4); }
    .module-card-header { display: flex; gap: 12px; align-items: center; }
    .module-icon { font-size: 28px; }
    .module-icon-large { font-size: 48px; }
    .module-name { font-size: 16px; color: #e5e7eb; }
    .module-category { font-size: 11px; color: #a855f7; }
    .module-description { font-size: 13px; color: #9ca3af; flex: 1; }
    .tech-stack { display: flex; flex-wrap: wrap; gap: 6px; }
    .tech-tag {
        padding: 2px 8px;
        border-radius: 4px;
        background: rgba(168, 85, 247, 0.15);
        color: #c4b5fd;
        font-size: 11px;
    }

    /* Buttons */
    .btn {
        display: inline-block;
        padding: 8px 16px;
        border-radius: 8px;
        border: 1px solid rgba(255, 255, 255, 0.15);
        background: rgba(255, 255, 255, 0.05);
        color: #e5e7eb;
        font-size: 13px;
        text-decoration: none;
        cursor: pointer;
    }
    .btn:hover { background: rgba(255, 255, 255, 0.1); }
    .btn-primary {
        align-self: flex-start;
        background: linear-gradient(to right, #22d3ee, #0891b2);
        border: none;
        color: #020617;
        font-weight: 600;
    }

    /* Generate view */
    .generate-header {
        display: flex;
        gap: 20px;
        align-items: flex-start;
        margin-bottom: 24px;
    }
    .generate-body {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 24px;
    }
    .field-form { display: flex; flex-direction: column; gap: 14px; }
    .field { display: flex; flex-direction: column; gap: 6px; }
    .field-label { font-size: 12px; color: #9ca3af; }
    .form-actions { display: flex; gap: 8px; margin-top: 8px; }
    .preview {
        padding: 16px;
        border-radius: 12px;
        background: rgba(0, 0, 0, 0.3);
    }
    .preview h3 { font-size: 13px; color: #6b7280; margin-bottom: 8px; }
    .preview-body {
        font-family: monospace;
        font-size: 13px;
        color: #4ade80;
        white-space: pre-wrap;
    }
"#;
