//! Fixed file contents for a freshly generated project.

pub const CMAKE_LISTS: &str = "CMakeLists.txt";
pub const README: &str = "README.md";
pub const SOURCE_DIR: &str = "src";
pub const MAIN_SOURCE: &str = "main.jakt";
pub const SECOND_MODULE_SOURCE: &str = "second_module.jakt";

pub fn cmake_lists(name: &str) -> String {
    format!(
        "cmake_minimum_required(VERSION 3.20)\nproject({name}\n   VERSION 1.0.0\n   LANGUAGES CXX\n)\n\nfind_package(Jakt REQUIRED)\n\nadd_jakt_executable({name}\n   MAIN_SOURCE src/main.jakt\n   MODULE_SOURCES\n     src/second_module.jakt\n)\n",
        name = name
    )
}

pub fn main_jakt() -> String {
    "import second_module { get_string }\n\nfn main() throws -> c_int {\n    println(\"{}!\", get_string())\n    return 0\n}\n".to_owned()
}

pub fn second_module_jakt() -> String {
    "fn get_string() throws -> String {\n    return \"Hello, World\"\n}\n".to_owned()
}

pub fn readme(name: &str) -> String {
    format!(
        "# Example Jakt Project\n\nThis example jakt project has two modules, hurray!\n\n## Building with jakt\n\n```console\njakt src/main.jakt -o {name}\n```\n\n## Building with CMake\n\nMake sure to install the ``jakt`` compiler somewhere. For example, ``/path/to/jakt-install``.\n\nThis can be done by cloning ``jakt``, and running the following commands from its directory:\n\n```console\njakt> cmake -GNinja -B build -DCMAKE_CXX_COMPILER=clang++ -DCMAKE_INSTALL_PREFIX=/path/to/jakt-install\njakt> cmake --build build\njakt> cmake --install build\n```\n\nNext you can build this project by configuring CMake to know where to find the ``jakt`` cmake helper scripts.\n\n```console\n> cmake -GNinja -B build -DCMAKE_CXX_COMPILER=clang++ -DCMAKE_PREFIX_PATH=/path/to/jakt-install\n> cmake --build build\n```\n\n## Running the application\n\nAfter building, the program will be in the ``build`` directory\n\n```console\n./build/{name}\n```\n\nWhich should print:\n\n```console\nHello, World!\n```\n",
        name = name
    )
}
