use super::fakes::{EmptyFileSystem, FakeEnvironment, RootedFileSystem};
use hostprobe::platform::detector::MAC_MARKER_DIRECTORIES;
use hostprobe::platform::{
    OsVersion, PlatformDetector, PlatformFamily, ProductType, RawPlatform,
};
use std::fs;
use tempfile::TempDir;

fn rooted_with(markers: &[&str]) -> (TempDir, RootedFileSystem) {
    let root = TempDir::new().unwrap();
    for marker in markers {
        fs::create_dir_all(root.path().join(marker.trim_start_matches('/'))).unwrap();
    }
    let fs = RootedFileSystem {
        root: root.path().to_path_buf(),
    };
    (root, fs)
}

#[test]
fn test_windows_like_identifiers_are_windows() {
    for raw in [RawPlatform::WindowsNt, RawPlatform::Other] {
        let detector = PlatformDetector::new(FakeEnvironment::new(raw), EmptyFileSystem);
        assert_eq!(detector.platform(), PlatformFamily::Windows);
    }
}

#[test]
fn test_unix_with_mac_root_folders_is_mac() {
    let (_root, fs) = rooted_with(&MAC_MARKER_DIRECTORIES);
    let detector = PlatformDetector::new(FakeEnvironment::new(RawPlatform::Unix), fs);

    assert_eq!(detector.platform(), PlatformFamily::Mac);
    assert_eq!(detector.name(), "macOS");
}

#[test]
fn test_unix_missing_one_mac_folder_is_linux() {
    let (_root, fs) = rooted_with(&["/Applications", "/System", "/Users"]);
    let detector = PlatformDetector::new(FakeEnvironment::new(RawPlatform::Unix), fs);

    assert_eq!(detector.platform(), PlatformFamily::Linux);
    assert_eq!(detector.name(), "Linux");
}

#[test]
fn test_marker_file_is_not_a_directory() {
    let (root, fs) = rooted_with(&["/Applications", "/System", "/Users"]);
    fs::write(root.path().join("Volumes"), "not a dir").unwrap();
    let detector = PlatformDetector::new(FakeEnvironment::new(RawPlatform::Unix), fs);

    assert_eq!(detector.platform(), PlatformFamily::Linux);
}

#[test]
fn test_macosx_identifier_is_mac_on_any_filesystem() {
    let detector = PlatformDetector::new(FakeEnvironment::new(RawPlatform::MacOsx), EmptyFileSystem);
    assert_eq!(detector.platform(), PlatformFamily::Mac);
}

#[test]
fn test_windows_10_names() {
    let workstation = PlatformDetector::new(FakeEnvironment::windows(10, 0), EmptyFileSystem);
    assert_eq!(workstation.name(), "Windows 10");

    let server = PlatformDetector::new(
        FakeEnvironment::windows(10, 0).with_product_type(ProductType::Server),
        EmptyFileSystem,
    );
    assert_eq!(server.name(), "Windows Server 2016");
}

#[test]
fn test_windows_7_server_name() {
    let detector = PlatformDetector::new(
        FakeEnvironment::windows(6, 1).with_product_type(ProductType::Server),
        EmptyFileSystem,
    );
    assert_eq!(detector.name(), "Windows Server 2008 R2");
}

#[test]
fn test_unrecognized_windows_version_name() {
    let detector = PlatformDetector::new(FakeEnvironment::windows(5, 0), EmptyFileSystem);
    assert_eq!(detector.name(), "Windows");
}

#[test]
fn test_repeated_queries_agree() {
    let (_root, fs) = rooted_with(&MAC_MARKER_DIRECTORIES);
    let detector = PlatformDetector::new(FakeEnvironment::new(RawPlatform::Unix), fs);

    let first = detector.platform();
    for _ in 0..5 {
        assert_eq!(detector.platform(), first);
    }
}

#[test]
fn test_version_passthrough() {
    let mut env = FakeEnvironment::new(RawPlatform::WindowsNt);
    env.version = OsVersion::new(6, 3, 9600);
    let detector = PlatformDetector::new(env, EmptyFileSystem);

    assert_eq!(detector.version(), OsVersion::new(6, 3, 9600));
    assert_eq!(detector.name(), "Windows 8.1");
}

#[test]
fn test_system_detector_matches_build_target() {
    let expected = if cfg!(target_os = "macos") {
        PlatformFamily::Mac
    } else if cfg!(unix) {
        PlatformFamily::Linux
    } else {
        PlatformFamily::Windows
    };

    assert_eq!(PlatformDetector::system().platform(), expected);
}
