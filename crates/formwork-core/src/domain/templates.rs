//! Fixed file skeletons and the rendering that fills them in.
//!
//! # Design
//!
//! Each skeleton is an opaque parameterized string with a single substitution
//! point — the artifact name as `{{NAME}}` — deliberately *not* a templating
//! language. No conditionals, no loops, no user-supplied template files. This
//! keeps [`render`] a pure, trivially testable function of
//! (kind, name).
//!
//! Skeleton literals are authored with surrounding blank lines for
//! readability; [`finalize`] strips the boundaries so authoring style never
//! leaks into generated files.

use crate::domain::{
    artifact::ArtifactKind,
    file_set::FileSet,
    name::ValidName,
};

/// The one placeholder a skeleton may contain.
const NAME_VAR: &str = "{{NAME}}";

// ── Project skeletons ─────────────────────────────────────────────────────────
//
// The project entry and its test are generic — the project name never appears
// in them. They land inside the directory the bootstrap collaborator created.

const PROJECT_APP: &str = r"
import React from 'react';

const App: React.FC = () => {
    return <h1>Hello, React + TypeScript!</h1>;
};

export default App;
";

const PROJECT_APP_TEST: &str = r"
import React from 'react';
import { render, screen } from '@testing-library/react';
import App from './App';

test('renders the correct content', () => {
    render(<App />);
    expect(screen.getByText('Hello, React + TypeScript!')).toBeInTheDocument();
});
";

const PROJECT_JEST_CONFIG: &str = r"
module.exports = {
    testEnvironment: 'jsdom',
    moduleFileExtensions: ['js', 'jsx', 'ts', 'tsx'],
    transform: {
        '^.+\\.(ts|tsx)$': 'ts-jest',
    },
};
";

// ── Component skeletons ───────────────────────────────────────────────────────

const COMPONENT_MAIN: &str = r"
import React from 'react';

interface {{NAME}}Props {}

const {{NAME}}: React.FC<{{NAME}}Props> = () => {
    return <div>{{NAME}} Component</div>;
};

export default {{NAME}};
";

const COMPONENT_TEST: &str = r"
import React from 'react';
import { render, screen } from '@testing-library/react';
import '@testing-library/jest-dom';
import {{NAME}} from './{{NAME}}';

test('renders {{NAME}} component', () => {
    render(<{{NAME}} />);
    expect(screen.getByText('{{NAME}} Component')).toBeInTheDocument();
});
";

// ── Hook skeleton ─────────────────────────────────────────────────────────────
//
// No test skeleton for hooks; see DESIGN.md.

const HOOK_MAIN: &str = r"
import { useState } from 'react';

const use{{NAME}} = () => {
    const [state, setState] = useState(null);

    return [state, setState];
};

export default use{{NAME}};
";

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render the file set for one artifact.
///
/// Output is fully determined by `(kind, name)`:
///
/// - `Project` — `src/App.tsx`, `src/App.test.tsx`, `jest.config.js`
///   (all fixed content, no substitution)
/// - `Component` — `<name>.tsx` + `<name>.test.tsx`
/// - `Hook` — `<name>.tsx` defining `use<name>` (no test file)
///
/// Paths are relative to the target directory computed by
/// [`crate::domain::planner::target_dir`].
pub fn render(kind: ArtifactKind, name: &ValidName) -> FileSet {
    let n = name.as_str();
    match kind {
        ArtifactKind::Project => FileSet::new()
            .with_file("src/App.tsx", finalize(PROJECT_APP))
            .with_file("src/App.test.tsx", finalize(PROJECT_APP_TEST))
            .with_file("jest.config.js", finalize(PROJECT_JEST_CONFIG)),
        ArtifactKind::Component => FileSet::new()
            .with_file(format!("{n}.tsx"), finalize(&substitute(COMPONENT_MAIN, n)))
            .with_file(
                format!("{n}.test.tsx"),
                finalize(&substitute(COMPONENT_TEST, n)),
            ),
        ArtifactKind::Hook => FileSet::new()
            .with_file(format!("{n}.tsx"), finalize(&substitute(HOOK_MAIN, n))),
    }
}

/// Replace every `{{NAME}}` occurrence with the artifact name.
///
/// Plain single-pass `str::replace`; names are already validated so the
/// substituted value can never itself contain a placeholder.
fn substitute(skeleton: &str, name: &str) -> String {
    skeleton.replace(NAME_VAR, name)
}

/// Strip leading/trailing blank lines from authored skeleton text.
///
/// Every generated file's content is boundary-trimmed before being
/// considered final, independent of how the literal above was written.
fn finalize(content: &str) -> String {
    content.trim().to_string()
}
