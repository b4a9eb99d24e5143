// crates/update_readme/src/lib.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use atomic_write::atomic_write;
use splice_sections::{splice_sections, ReplacementBlocks, SectionMarkers};

/// Heading that opens the features section, kept verbatim.
pub const FEATURES_OVERVIEW_MARKER: &str = "## Features Overview";

/// Heading that opens the stale compile instructions, dropped on update.
pub const OLD_COMPILE_MARKER: &str = "## How to Compile & Run Examples";

/// First heading after the compile instructions; everything from here on is
/// carried over untouched.
pub const SKIP_LIST_MARKER: &str = "## Skip List (`skiplist.h`)";

/// Directory-structure section inserted ahead of the features overview.
pub const DIRECTORY_STRUCTURE_SECTION: &str = r#"## Directory Structure

The project is organized as follows:

- `CMakeLists.txt`: The main CMake file to configure and build the project.
- `include/`: Contains the header files for the data structures (`skiplist.h`, `trie.h`, `policy_radix.h`). Since these are header-only libraries, you primarily interact with these files.
- `examples/`: Contains example source files (`example.cpp`, `use_policy.cpp`, `use_skip.cpp`) demonstrating how to use the data structures.
- `tests/`: Contains test source files and related data.
  - `tests/CMakeLists.txt`: CMake file specifically for building and running tests using Google Test.
  - `tests/trie_test.txt`: Example test data for the Trie.
- `.gitignore`: Specifies intentionally untracked files that Git should ignore.
"#;

/// Compile-and-run section that replaces the stale instructions.
pub const COMPILE_SECTION: &str = r#"## How to Compile & Run

This project uses CMake to manage the build process. The data structures themselves are header-only and located in the `include/` directory. Examples and tests are provided to demonstrate usage and verify functionality.

### Prerequisites
- A C++17 compliant compiler (e.g., GCC, Clang, MSVC)
- CMake (version 3.10 or higher recommended)

### Building the Project (Examples and Tests)

1.  **Clone the repository:**
    ```bash
    git clone <repository_url>
    cd <repository_directory>
    ```

2.  **Configure with CMake:**
    It's recommended to build in a separate directory (e.g., `build/`):
    ```bash
    mkdir build
    cd build
    cmake ..
    ```
    This will configure the project and generate build files for your environment (e.g., Makefiles on Linux/macOS, Visual Studio solution on Windows).

3.  **Compile:**
    ```bash
    cmake --build .
    ```
    Or, if using Makefiles (after `cmake ..`):
    ```bash
    make
    ```
    This will compile the example executables (e.g., `trie_example`, `policy_example`, `skip_example`) and the test runner (`run_tests`). The executables will typically be found in the `build/` directory.

### Running Examples

After successful compilation, you can run the examples from the build directory:
```bash
./trie_example
./policy_example
./skip_example
```
*(Note: On Windows, they would be `.exe` files, e.g., `./trie_example.exe`)*

### Running Tests

The tests are compiled into an executable named `run_tests`. You can run it from the build directory:
```bash
./run_tests
```
Or, using CTest (which is configured by CMake):
```bash
ctest
```
CTest will provide a summary of test results.
"#;

/// Rewrites the README at `readme_path` in place: inserts the directory
/// structure section ahead of the features overview and replaces the stale
/// compile instructions with [`COMPILE_SECTION`].
///
/// The file is read once, transformed in memory, and only written back after
/// the splice succeeds, so a missing or out-of-order marker leaves the file
/// exactly as it was. The write itself goes through [`atomic_write`], so a
/// failed write cannot truncate the README either.
pub fn update_readme<P: AsRef<Path>>(readme_path: P) -> Result<()> {
    let path = readme_path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let markers = SectionMarkers {
        features: FEATURES_OVERVIEW_MARKER,
        old_compile: OLD_COMPILE_MARKER,
        tail: SKIP_LIST_MARKER,
    };
    let blocks = ReplacementBlocks {
        structure: DIRECTORY_STRUCTURE_SECTION,
        compile: COMPILE_SECTION,
    };

    let updated = splice_sections(&content, &markers, &blocks)?;

    atomic_write(path, &updated)
        .with_context(|| format!("Failed to write updated {}", path.display()))?;
    Ok(())
}
