//! Global CSS styles for the Membership Card Generator.
//!
//! Light single-column form; the card itself is styled by its own markup.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface: #ffffff;
  --surface-muted: #f4f4f5;
  --border: #e4e4e7;

  /* TEXT */
  --text-primary: #09090b;
  --text-secondary: #52525b;
  --text-muted: #a1a1aa;

  /* ACCENT */
  --accent: #18181b;
  --accent-hover: #27272a;
  --ring: #a855f7;

  /* Typography */
  --font-sans: Inter, 'Helvetica Neue', Helvetica, Arial, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-2xl: 1.5rem;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
}

/* === Layout === */
.generator {
  max-width: 28rem;
  margin: 0 auto;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.generator__title {
  margin: 0;
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
}

.field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.field label {
  font-size: var(--text-sm);
  font-weight: 500;
}

/* === Inputs === */
.input-field,
.select-field {
  width: 100%;
  height: 2.5rem;
  padding: 0.5rem 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  transition: box-shadow 0.15s ease;
}

.input-field::placeholder {
  color: var(--text-muted);
}

.input-field:focus,
.select-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--ring);
}

.photo-upload {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.photo-upload__status {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  height: 2.5rem;
  padding: 0 1rem;
  border-radius: 6px;
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  font-weight: 500;
  cursor: pointer;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  transition: background 0.15s ease;
}

.btn-primary {
  flex: 1;
  background: var(--accent);
  border: 1px solid var(--accent);
  color: #fafafa;
}

.btn-primary:hover {
  background: var(--accent-hover);
}

.btn-secondary {
  background: var(--surface-muted);
  border: 1px solid var(--border);
  color: var(--text-primary);
}

.btn-secondary:disabled {
  opacity: 0.5;
  cursor: wait;
}

.btn-icon {
  width: 1rem;
  text-align: center;
}

/* === Card === */
.card-preview {
  display: flex;
  justify-content: center;
}

.card-preview svg {
  max-width: 100%;
  height: auto;
  border-radius: 8px;
  box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);
}

.export-actions {
  display: flex;
  gap: 0.5rem;
}
"#;
